//! Metric normalization.
//!
//! Rescales every agent's raw metrics onto [0, 1] relative to the largest
//! value observed for that metric, so metrics on different scales (months,
//! percent, client counts) can be weighted against each other.

use crate::domain::{Metric, MetricValues, SalesAgent};

/// An agent together with its normalized metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAgent {
    pub agent: SalesAgent,
    pub normalized: MetricValues,
}

/// Largest raw value per metric across `agents`, floored at 0.
pub fn max_metric_values(agents: &[SalesAgent]) -> MetricValues {
    MetricValues::from_fn(|metric| {
        agents
            .iter()
            .map(|a| a.metrics().get(metric))
            .fold(0.0, f64::max)
    })
}

/// Normalize each agent's metrics against the per-metric maximum.
///
/// A metric whose maximum is 0 uses divisor 1, which leaves every agent at 0
/// for that metric. Input order is preserved.
pub fn normalize_agents(agents: &[SalesAgent]) -> Vec<NormalizedAgent> {
    let max = max_metric_values(agents);
    let divisor = MetricValues::from_fn(|metric| divisor_for(max.get(metric)));

    agents
        .iter()
        .map(|agent| {
            let raw = agent.metrics();
            NormalizedAgent {
                agent: agent.clone(),
                normalized: MetricValues::from_fn(|m: Metric| raw.get(m) / divisor.get(m)),
            }
        })
        .collect()
}

fn divisor_for(max: f64) -> f64 {
    if max == 0.0 {
        1.0
    } else {
        max
    }
}
