use std::path::Path;

use crate::error::ScoringError;

/// Candidate window and rejection policy for word alignment.
///
/// For reference word `i`, recognized indices within `window_radius` of `i`
/// are candidates. The best candidate is still rejected (the reference word
/// is treated as omitted) when its character edit cost exceeds the reference
/// word's length plus `unmatched_slack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct AlignPolicy {
    #[serde(default = "default_window_radius")]
    pub window_radius: usize,
    #[serde(default)]
    pub unmatched_slack: usize,
}

impl AlignPolicy {
    pub const DEFAULT_WINDOW_RADIUS: usize = 2;
}

impl Default for AlignPolicy {
    fn default() -> Self {
        Self {
            window_radius: Self::DEFAULT_WINDOW_RADIUS,
            unmatched_slack: 0,
        }
    }
}

/// Accuracy-percent floors for each quality tier; anything below `fair` is
/// Poor. Must be non-increasing from `excellent` to `fair`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
pub struct CategoryThresholds {
    #[serde(default = "default_excellent")]
    pub excellent: f64,
    #[serde(default = "default_good")]
    pub good: f64,
    #[serde(default = "default_fair")]
    pub fair: f64,
}

impl CategoryThresholds {
    pub const DEFAULT_EXCELLENT: f64 = 90.0;
    pub const DEFAULT_GOOD: f64 = 75.0;
    pub const DEFAULT_FAIR: f64 = 50.0;

    pub(crate) fn is_ordered(&self) -> bool {
        self.excellent >= self.good && self.good >= self.fair
    }
}

impl Default for CategoryThresholds {
    fn default() -> Self {
        Self {
            excellent: Self::DEFAULT_EXCELLENT,
            good: Self::DEFAULT_GOOD,
            fair: Self::DEFAULT_FAIR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, serde::Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub case: CasePolicy,
    pub align: AlignPolicy,
    pub thresholds: CategoryThresholds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasePolicy {
    /// Lower-case both sides before comparison (the reference behavior).
    #[default]
    Lowercase,
    /// Compare exactly as written.
    Preserve,
}

impl ScoringConfig {
    pub fn load(path: &Path) -> Result<Self, ScoringError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| ScoringError::io("read scoring config", e))?;
        serde_json::from_str(&data).map_err(|e| ScoringError::json("parse scoring config", e))
    }
}

fn default_window_radius() -> usize {
    AlignPolicy::DEFAULT_WINDOW_RADIUS
}
fn default_excellent() -> f64 {
    CategoryThresholds::DEFAULT_EXCELLENT
}
fn default_good() -> f64 {
    CategoryThresholds::DEFAULT_GOOD
}
fn default_fair() -> f64 {
    CategoryThresholds::DEFAULT_FAIR
}
