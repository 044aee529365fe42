//! Weighted scoring of normalized agents.

use crate::domain::{MetricValues, MetricWeights, SalesAgent};
use crate::normalize::NormalizedAgent;

/// A normalized agent plus its single weighted score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredAgent {
    pub agent: SalesAgent,
    pub normalized: MetricValues,
    /// Sign and range follow from the weights.
    pub weighted_score: f64,
}

/// Weighted sum of normalized values. Zero weights contribute nothing.
pub fn weighted_score(normalized: &MetricValues, weights: &MetricWeights) -> f64 {
    normalized
        .iter()
        .filter_map(|(metric, value)| {
            let weight = weights.weight(metric);
            (weight != 0.0).then_some(value * weight)
        })
        .sum()
}

/// Score every agent, preserving order.
pub fn score_agents(agents: Vec<NormalizedAgent>, weights: &MetricWeights) -> Vec<ScoredAgent> {
    agents
        .into_iter()
        .map(|n| {
            let weighted_score = weighted_score(&n.normalized, weights);
            ScoredAgent {
                agent: n.agent,
                normalized: n.normalized,
                weighted_score,
            }
        })
        .collect()
}

/// Sum of all weighted scores.
pub fn total_weighted_score(agents: &[ScoredAgent]) -> f64 {
    agents.iter().map(|a| a.weighted_score).sum()
}

/// Sum of the positive weighted scores; negative scores count as 0.
pub fn positive_weighted_score(agents: &[ScoredAgent]) -> f64 {
    agents.iter().map(|a| a.weighted_score.max(0.0)).sum()
}

/// Index of the highest-scoring agent; the earliest wins among equals.
pub fn top_scorer_index(agents: &[ScoredAgent]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, agent) in agents.iter().enumerate() {
        match best {
            Some(b) if agent.weighted_score <= agents[b].weighted_score => {}
            _ => best = Some(idx),
        }
    }
    best
}
