//! Domain-level error taxonomy for the kitty allocator.

use super::agent::Metric;

/// Errors produced by input validation, before any allocation work starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("agent at index {index} has an empty id")]
    EmptyAgentId { index: usize },

    #[error("duplicate agent id: {id}")]
    DuplicateAgentId { id: String },

    #[error("agent {id} has invalid {metric}: {value} (must be finite and non-negative)")]
    InvalidMetric {
        id: String,
        metric: Metric,
        value: f64,
    },

    #[error("baseBonusSplit must be within [0, 1], got {value}")]
    InvalidSplit { value: f64 },

    #[error("weight for {metric} must be finite, got {value}")]
    InvalidWeight { metric: Metric, value: f64 },
}

/// Kitty allocator errors.
#[derive(Debug, thiserror::Error)]
pub enum KittyError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for kitty allocator operations.
pub type Result<T> = std::result::Result<T, KittyError>;
