//! Human-readable justifications attached to each allocation.

use serde::{Deserialize, Serialize};

use crate::domain::JustificationThresholds;

/// Why an agent received their amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justification {
    /// Weighted score met the `high` cutoff.
    Excellent,
    /// Weighted score met the `medium` cutoff.
    Strong,
    /// Bonus pool was distributed, score below both cutoffs.
    Bonus,
    /// No bonus pool was distributed.
    BaseOnly,
}

impl Justification {
    /// Pick the bonus tier for a weighted score.
    pub fn for_score(score: f64, thresholds: &JustificationThresholds) -> Self {
        if thresholds.high.is_some_and(|high| score >= high) {
            Justification::Excellent
        } else if thresholds.medium.is_some_and(|medium| score >= medium) {
            Justification::Strong
        } else {
            Justification::Bonus
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Justification::Excellent => {
                "Excellent performance bonus on top of a base allocation for team contribution."
            }
            Justification::Strong => "Strong performance bonus added to the base team allocation.",
            Justification::Bonus => "Receives base team allocation plus a performance-based bonus.",
            Justification::BaseOnly => {
                "Receives base team allocation. No performance bonus applied."
            }
        }
    }
}
