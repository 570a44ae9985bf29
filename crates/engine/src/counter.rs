//! Character accounting for post bodies.

use serde::{Deserialize, Serialize};

/// LinkedIn's post body limit.
pub const POST_CHAR_LIMIT: usize = 3000;

/// Fill level of the counter, keyed to the display thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountStatus {
    /// Up to half the limit.
    Low,
    /// Past 50%.
    Medium,
    /// Past 75%.
    High,
    /// Past 90%.
    Critical,
}

/// Character count of a post body against a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCount {
    pub count: usize,
    pub limit: usize,
}

impl CharacterCount {
    pub fn new(text: &str) -> Self {
        Self::with_limit(text, POST_CHAR_LIMIT)
    }

    pub fn with_limit(text: &str, limit: usize) -> Self {
        Self {
            count: text.chars().count(),
            limit,
        }
    }

    /// May exceed 100 when the text is over the limit.
    pub fn percent_used(&self) -> f64 {
        self.count as f64 / self.limit as f64 * 100.0
    }

    /// Floored at 0.
    pub fn remaining_percent(&self) -> f64 {
        (100.0 - self.percent_used()).max(0.0)
    }

    pub fn is_over_limit(&self) -> bool {
        self.count > self.limit
    }

    pub fn status(&self) -> CountStatus {
        let pct = self.percent_used();
        if pct > 90.0 {
            CountStatus::Critical
        } else if pct > 75.0 {
            CountStatus::High
        } else if pct > 50.0 {
            CountStatus::Medium
        } else {
            CountStatus::Low
        }
    }
}

/// Whitespace-separated word count, as shown on optimized versions.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
