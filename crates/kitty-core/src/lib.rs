//! Kitty Allocator Core Library
//!
//! Splits a fixed discount kitty among sales agents: an equal base share for
//! everyone plus a bonus share weighted by normalized performance metrics,
//! with the kitty always handed out exactly.

pub mod allocate;
pub mod domain;
pub mod justification;
pub mod normalize;
pub mod obs;
pub mod reporting;
pub mod score;
pub mod telemetry;

pub use allocate::{allocate_discount, bonus_share, PoolSplit};

pub use domain::{
    validate_agents, validate_config, AllocationConfig, AllocationRecord, AllocationRequest,
    AllocationResult, JustificationThresholds, KittyError, Metric, MetricValues, MetricWeights,
    Result, SalesAgent, ValidationError,
};

pub use justification::Justification;
pub use normalize::{max_metric_values, normalize_agents, NormalizedAgent};
pub use score::{
    positive_weighted_score, score_agents, top_scorer_index, total_weighted_score, weighted_score,
    ScoredAgent,
};

pub use obs::{
    emit_allocation_finished, emit_allocation_rejected, emit_allocation_started,
    emit_pools_split, emit_remainder_assigned, AllocationSpan,
};
pub use reporting::{render_allocation_md, write_allocation_json};
pub use telemetry::init_tracing;

/// Kitty allocator version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
