//! Domain models for the kitty allocator.
//!
//! Canonical definitions for the core entities:
//! - `SalesAgent`: An agent and its raw metrics
//! - `AllocationConfig`: Pool split, weights and justification cutoffs
//! - `AllocationRequest` / `AllocationResult`: Input and output documents

pub mod agent;
pub mod allocation;
pub mod config;
pub mod error;
pub mod validation;

// Re-export main types and errors
pub use agent::{Metric, MetricValues, SalesAgent};
pub use allocation::{AllocationRecord, AllocationRequest, AllocationResult};
pub use config::{AllocationConfig, JustificationThresholds, MetricWeights};
pub use error::{KittyError, Result, ValidationError};
pub use validation::{validate_agents, validate_config};
