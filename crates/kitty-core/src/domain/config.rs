//! Allocation configuration: pool split, metric weights and justification cutoffs.

use serde::{Deserialize, Serialize};

use super::agent::Metric;
use super::error::Result;

/// Per-metric weights. Any field left out of the document weighs 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricWeights {
    pub performance_score: f64,
    pub seniority_months: f64,
    pub target_achieved_percent: f64,
    pub active_clients: f64,
}

impl MetricWeights {
    pub fn weight(&self, metric: Metric) -> f64 {
        match metric {
            Metric::PerformanceScore => self.performance_score,
            Metric::SeniorityMonths => self.seniority_months,
            Metric::TargetAchievedPercent => self.target_achieved_percent,
            Metric::ActiveClients => self.active_clients,
        }
    }

    /// Set the weight for one metric.
    pub fn with(mut self, metric: Metric, weight: f64) -> Self {
        match metric {
            Metric::PerformanceScore => self.performance_score = weight,
            Metric::SeniorityMonths => self.seniority_months = weight,
            Metric::TargetAchievedPercent => self.target_achieved_percent = weight,
            Metric::ActiveClients => self.active_clients = weight,
        }
        self
    }
}

/// Weighted-score cutoffs for the justification tiers.
///
/// An absent cutoff never matches, so a config without thresholds puts
/// every bonus recipient in the lowest tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JustificationThresholds {
    pub high: Option<f64>,
    pub medium: Option<f64>,
}

/// Full allocation configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AllocationConfig {
    /// Fraction of the kitty (0.0 to 1.0) shared equally; the rest is the bonus pool.
    pub base_bonus_split: f64,
    pub weights: MetricWeights,
    pub justification_thresholds: JustificationThresholds,
}

impl AllocationConfig {
    /// Parse a configuration document.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn with_base_bonus_split(mut self, split: f64) -> Self {
        self.base_bonus_split = split;
        self
    }

    pub fn with_weights(mut self, weights: MetricWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_thresholds(mut self, high: f64, medium: f64) -> Self {
        self.justification_thresholds = JustificationThresholds {
            high: Some(high),
            medium: Some(medium),
        };
        self
    }
}
