//! Extraction Engine — deterministic, best-effort conversion of raw model
//! output into structured records, shaped by the request mode.
//!
//! There is no error channel anywhere in this module: the upstream text
//! source is a generative model, so "parse failure" is a normal occurrence
//! and degrades to partial or empty output.

pub mod hashtags;
pub mod optimization;

pub use hashtags::{parse_hashtags, HashtagSet};
pub use optimization::{parse_optimization, OptimizationResult, ScoreBand};

use serde::{Deserialize, Serialize};

/// Request mode, using the wire names the UI sends to the generation
/// endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Generate,
    Optimize,
    Hashtag,
    Enhance,
    Rewrite,
}

/// Output of [`extract`], shaped by the request mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Extracted {
    Optimization(OptimizationResult),
    Hashtags(HashtagSet),
    /// Raw model text, untouched. Produced for modes with no parsing rules.
    Text(String),
}

/// Routes raw model output through the parser for its mode.
///
/// `generate`, `enhance`, and `rewrite` responses are displayed verbatim by
/// the caller, so they pass through unchanged.
pub fn extract(mode: Mode, raw: &str) -> Extracted {
    match mode {
        Mode::Optimize => Extracted::Optimization(parse_optimization(raw)),
        Mode::Hashtag => Extracted::Hashtags(parse_hashtags(raw)),
        Mode::Generate | Mode::Enhance | Mode::Rewrite => Extracted::Text(raw.to_owned()),
    }
}
