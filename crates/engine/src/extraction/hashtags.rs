//! Hashtag extraction — one candidate tag per line of model output.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Kept tags must be strictly longer than this after stripping: the
/// leading `#` plus at least two content characters.
const MIN_TAG_LEN: usize = 2;

/// Flat, ordered list of hashtag tokens.
///
/// Each generation replaces the previous set wholesale; nothing is merged.
/// Duplicates and case are preserved — deduplication, if wanted, is the
/// caller's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagSet {
    pub tags: Vec<String>,
}

impl HashtagSet {
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tags.iter()
    }

    /// Space-joined form, ready for the clipboard.
    pub fn joined(&self) -> String {
        self.tags.join(" ")
    }
}

/// Parses hashtag candidates out of raw model output.
///
/// Keeps lines whose trimmed form starts with `#`, strips every character
/// that is not ASCII alphanumeric or `#` (stray punctuation a model may
/// emit, like trailing commas), and drops anything of length 2 or less
/// after stripping. Never errors; input with no qualifying lines yields an
/// empty set.
pub fn parse_hashtags(raw: &str) -> HashtagSet {
    let tags: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('#'))
        .map(|line| {
            line.chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '#')
                .collect::<String>()
        })
        .filter(|tag| tag.len() > MIN_TAG_LEN)
        .collect();
    debug!(tags = tags.len(), "parsed hashtag response");
    HashtagSet { tags }
}
