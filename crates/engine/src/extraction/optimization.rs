//! Optimization-report extraction — score, tips, and rewritten versions
//! from one block of model output.
//!
//! The upstream text producer is a generative model that cannot be trusted
//! to follow format instructions exactly, so every rule here is best-effort:
//! malformed input degrades to partial or empty output, never an error.
//! Each marker rule is a named function so tests can target it on its own.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const MAX_TIPS: usize = 3;
const MAX_VERSIONS: usize = 3;

static SCORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)score:\s*([0-9]+)").unwrap());
static TIPS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)tips?:").unwrap());
static VERSION_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)optimized\s+version").unwrap());
static TIP_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+\.").unwrap());
static VERSION_MARKER_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    (1..=MAX_VERSIONS)
        .map(|n| Regex::new(&format!(r"(?i)optimized\s+version\s+{n}\s*:")).unwrap())
        .collect()
});

/// Structured result of analyzing one post.
///
/// Constructed once per analysis request; immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Engagement-quality estimate, 0–100.
    pub score: u8,
    /// Improvement tips in source order, at most three.
    pub tips: Vec<String>,
    /// Complete alternative versions of the post, in the order their
    /// markers appeared. Empty captures are dropped.
    pub optimized_versions: Vec<String>,
}

impl OptimizationResult {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.score)
    }
}

/// Qualitative band for an engagement score, shown next to the gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    RoomForImprovement,
    NeedsWork,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        match score {
            80.. => ScoreBand::Excellent,
            60..=79 => ScoreBand::Good,
            40..=59 => ScoreBand::RoomForImprovement,
            _ => ScoreBand::NeedsWork,
        }
    }
}

/// Parses one block of raw model output into an [`OptimizationResult`].
///
/// Never errors: text containing none of the expected markers yields
/// `score = 0` and empty lists.
pub fn parse_optimization(raw: &str) -> OptimizationResult {
    let result = OptimizationResult {
        score: parse_score(raw),
        tips: parse_tips(raw),
        optimized_versions: parse_versions(raw),
    };
    debug!(
        score = result.score,
        tips = result.tips.len(),
        versions = result.optimized_versions.len(),
        "parsed optimization response"
    );
    result
}

/// First `Score: <digits>` match, clamped to 0–100. A missing marker falls
/// back to 0.
fn parse_score(raw: &str) -> u8 {
    let Some(caps) = SCORE_RE.captures(raw) else {
        warn!("model output has no score marker, defaulting to 0");
        return 0;
    };
    // A digit run too long for u32 clamps like any other value above 100.
    match caps[1].parse::<u32>() {
        Ok(n) => n.min(100) as u8,
        Err(_) => 100,
    }
}

/// Tips live between the `Tips:` marker and the first `Optimized Version`
/// header. Text before the first `N.` marker is discarded, so a tips
/// section with no numbering parses to an empty list.
fn parse_tips(raw: &str) -> Vec<String> {
    let Some(marker) = TIPS_RE.find(raw) else {
        return Vec::new();
    };
    let after = &raw[marker.end()..];
    let span = match VERSION_HEADER_RE.find(after) {
        Some(header) => &after[..header.start()],
        None => after,
    };
    TIP_MARKER_RE
        .split(span)
        .skip(1)
        .map(str::trim)
        .filter(|tip| !tip.is_empty())
        .take(MAX_TIPS)
        .map(str::to_owned)
        .collect()
}

/// Each `Optimized Version N:` capture runs from its marker to the next
/// version marker present in the text, or to the end for the last one.
/// Captures that are empty after trimming are dropped.
fn parse_versions(raw: &str) -> Vec<String> {
    let mut markers: Vec<(usize, usize)> = VERSION_MARKER_RES
        .iter()
        .filter_map(|re| re.find(raw))
        .map(|m| (m.start(), m.end()))
        .collect();
    markers.sort_unstable();

    let mut versions = Vec::new();
    for (i, &(_, end)) in markers.iter().enumerate() {
        let until = markers.get(i + 1).map_or(raw.len(), |&(start, _)| start);
        let body = raw[end..until].trim();
        if !body.is_empty() {
            versions.push(body.to_owned());
        }
    }
    versions
}
