//! Structured observability hooks for allocation calls.
//!
//! This module provides:
//! - Allocation-scoped tracing spans via the `AllocationSpan` RAII guard
//! - Emission functions for the allocation lifecycle: start, pool split,
//!   remainder assignment, finish and rejection
//!
//! Events are emitted at `info!` level (`warn!` for rejections); filter with
//! `RUST_LOG`.

use tracing::info;

/// RAII guard that enters an allocation-scoped tracing span.
///
/// # Example
///
/// ```ignore
/// let _span = AllocationSpan::enter("alloc-12345");
/// // All tracing calls are now associated with allocation_id = "alloc-12345"
/// ```
pub struct AllocationSpan {
    _span: tracing::span::EnteredSpan,
}

impl AllocationSpan {
    /// Create and enter a span tagged with the allocation id.
    pub fn enter(allocation_id: &str) -> Self {
        let span = tracing::info_span!("kitty.allocation", allocation_id = %allocation_id);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: allocation started.
pub fn emit_allocation_started(site_kitty: u64, agent_count: usize) {
    info!(
        event = "allocation.started",
        site_kitty = site_kitty,
        agent_count = agent_count,
    );
}

/// Emit event: kitty split into base and bonus pools.
pub fn emit_pools_split(base_per_agent: u64, base_total: u64, bonus_kitty: f64) {
    info!(
        event = "allocation.pools_split",
        base_per_agent = base_per_agent,
        base_total = base_total,
        bonus_kitty = bonus_kitty,
    );
}

/// Emit event: rounding remainder handed to the top scorer.
pub fn emit_remainder_assigned(agent_id: &str, units: u64) {
    info!(event = "allocation.remainder_assigned", agent_id = %agent_id, units = units);
}

/// Emit event: allocation finished.
pub fn emit_allocation_finished(total_allocated: u64, remaining_kitty: u64) {
    info!(
        event = "allocation.finished",
        total_allocated = total_allocated,
        remaining_kitty = remaining_kitty,
    );
}

/// Emit event: input rejected before allocation (warning level).
pub fn emit_allocation_rejected(error: &dyn std::fmt::Display) {
    tracing::warn!(event = "allocation.rejected", error = %error);
}
