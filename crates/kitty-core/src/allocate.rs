//! Kitty allocation engine.
//!
//! Splits a site kitty into a base pool shared equally by every agent and a
//! bonus pool distributed in proportion to each agent's weighted score.
//! Floor rounding leaves a few units behind; those are handed to the top
//! scorer so the kitty is always exhausted for a non-empty agent list.

use tracing::debug;

use crate::domain::{
    validate_agents, validate_config, AllocationConfig, AllocationRecord, AllocationResult,
    Result, SalesAgent,
};
use crate::justification::Justification;
use crate::normalize::normalize_agents;
use crate::obs::{
    emit_allocation_finished, emit_allocation_rejected, emit_allocation_started,
    emit_pools_split, emit_remainder_assigned,
};
use crate::score::{
    positive_weighted_score, score_agents, top_scorer_index, total_weighted_score,
};

/// Base and bonus pools for one allocation.
///
/// Pool sizes are computed in `f64`, which represents every kitty up to 2^53
/// exactly. Larger kitties lose low-order units in the pool sizes; the per-agent
/// base is still capped at `site_kitty / agent_count` and the remainder step
/// hands out whatever the ledger has not yet allocated, so the kitty is
/// exhausted either way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolSplit {
    /// `site_kitty * base_bonus_split`.
    pub base_kitty: f64,
    /// `site_kitty * (1 - base_bonus_split)`.
    pub bonus_kitty: f64,
    /// `floor(base_kitty / agent_count)`, paid to every agent.
    pub base_per_agent: u64,
}

impl PoolSplit {
    pub fn new(site_kitty: u64, base_bonus_split: f64, agent_count: usize) -> Self {
        let kitty = site_kitty as f64;
        let base_kitty = kitty * base_bonus_split;
        let bonus_kitty = kitty * (1.0 - base_bonus_split);

        let base_per_agent = match agent_count {
            0 => 0,
            n => floor_units(base_kitty / n as f64).min(site_kitty / n as u64),
        };

        Self {
            base_kitty,
            bonus_kitty,
            base_per_agent,
        }
    }
}

/// Bonus units for one agent: `floor(max(score, 0) / positive_total * bonus_kitty)`.
///
/// `positive_total` is the sum of the non-negative scores, so shares never add
/// up to more than the bonus pool. Negative scores pay nothing.
pub fn bonus_share(weighted_score: f64, positive_total: f64, bonus_kitty: f64) -> u64 {
    if positive_total <= 0.0 {
        return 0;
    }
    floor_units(weighted_score.max(0.0) / positive_total * bonus_kitty)
}

fn floor_units(amount: f64) -> u64 {
    if amount.is_finite() && amount > 0.0 {
        amount.floor() as u64
    } else {
        0
    }
}

/// Running per-agent amounts, indexed like the input agent list.
struct Ledger {
    site_kitty: u64,
    total_allocated: u64,
    amounts: Vec<u64>,
    justifications: Vec<Option<Justification>>,
}

impl Ledger {
    fn with_base(site_kitty: u64, agent_count: usize, base_per_agent: u64) -> Self {
        Self {
            site_kitty,
            total_allocated: base_per_agent * agent_count as u64,
            amounts: vec![base_per_agent; agent_count],
            justifications: vec![None; agent_count],
        }
    }

    fn unallocated(&self) -> u64 {
        self.site_kitty - self.total_allocated
    }

    /// Credit up to `units` to agent `idx`; never exceeds the kitty.
    fn credit(&mut self, idx: usize, units: u64) -> u64 {
        let granted = units.min(self.unallocated());
        self.amounts[idx] += granted;
        self.total_allocated += granted;
        granted
    }

    fn justify(&mut self, idx: usize, justification: Justification) {
        self.justifications[idx] = Some(justification);
    }

    fn into_result(self, agents: &[SalesAgent]) -> AllocationResult {
        let allocations = agents
            .iter()
            .zip(self.amounts)
            .zip(self.justifications)
            .map(|((agent, assigned_discount), justification)| AllocationRecord {
                id: agent.id.clone(),
                assigned_discount,
                justification: justification
                    .unwrap_or(Justification::BaseOnly)
                    .message()
                    .to_string(),
            })
            .collect();

        AllocationResult {
            allocations,
            total_allocated: self.total_allocated,
            remaining_kitty: self.site_kitty - self.total_allocated,
        }
    }
}

/// Allocate `site_kitty` among `agents` according to `config`.
///
/// An empty agent list returns the kitty untouched. Otherwise the input is
/// validated first, then every agent receives the equal base share, the bonus
/// pool is split by weighted score, and any rounding remainder goes to the
/// highest scorer (earliest in input order among ties).
///
/// # Errors
///
/// - `KittyError::Validation`: an agent or the config failed
///   [`validate_agents`] / [`validate_config`].
pub fn allocate_discount(
    site_kitty: u64,
    agents: &[SalesAgent],
    config: &AllocationConfig,
) -> Result<AllocationResult> {
    if agents.is_empty() {
        debug!("no agents; kitty left untouched");
        return Ok(AllocationResult::empty(site_kitty));
    }

    if let Err(err) = validate_config(config).and_then(|()| validate_agents(agents)) {
        emit_allocation_rejected(&err);
        return Err(err.into());
    }

    emit_allocation_started(site_kitty, agents.len());

    let pools = PoolSplit::new(site_kitty, config.base_bonus_split, agents.len());
    let mut ledger = Ledger::with_base(site_kitty, agents.len(), pools.base_per_agent);
    emit_pools_split(
        pools.base_per_agent,
        ledger.total_allocated,
        pools.bonus_kitty,
    );

    let scored = score_agents(normalize_agents(agents), &config.weights);
    let total_score = total_weighted_score(&scored);

    if total_score > 0.0 {
        let positive_total = positive_weighted_score(&scored);
        for (idx, agent) in scored.iter().enumerate() {
            let share = bonus_share(agent.weighted_score, positive_total, pools.bonus_kitty);
            let granted = ledger.credit(idx, share);
            ledger.justify(
                idx,
                Justification::for_score(agent.weighted_score, &config.justification_thresholds),
            );
            debug!(
                agent_id = %agent.agent.id,
                weighted_score = agent.weighted_score,
                bonus = granted,
                "bonus applied"
            );
        }
    } else {
        debug!(total_score, "no positive weighted score; bonus pool not distributed");
    }

    let remainder = ledger.unallocated();
    if remainder > 0 {
        if let Some(top) = top_scorer_index(&scored) {
            ledger.credit(top, remainder);
            emit_remainder_assigned(&scored[top].agent.id, remainder);
        }
    }

    let result = ledger.into_result(agents);
    emit_allocation_finished(result.total_allocated, result.remaining_kitty);
    Ok(result)
}
