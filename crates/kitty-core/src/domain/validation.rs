//! Input validation for allocation requests.
//!
//! Runs before any allocation work so that malformed numbers are reported
//! up front instead of leaking into scores as NaN or negative shares.

use std::collections::HashSet;

use super::agent::{Metric, SalesAgent};
use super::config::AllocationConfig;
use super::error::ValidationError;

/// Validate an agent list.
///
/// # Errors
///
/// - `ValidationError::EmptyAgentId`: an agent id is the empty string.
/// - `ValidationError::DuplicateAgentId`: two agents share an id.
/// - `ValidationError::InvalidMetric`: a metric is negative, NaN or infinite.
pub fn validate_agents(agents: &[SalesAgent]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(agents.len());

    for (index, agent) in agents.iter().enumerate() {
        if agent.id.is_empty() {
            return Err(ValidationError::EmptyAgentId { index });
        }
        if !seen.insert(agent.id.as_str()) {
            return Err(ValidationError::DuplicateAgentId {
                id: agent.id.clone(),
            });
        }
        for (metric, value) in agent.metrics().iter() {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidMetric {
                    id: agent.id.clone(),
                    metric,
                    value,
                });
            }
        }
    }

    Ok(())
}

/// Validate an allocation config.
///
/// # Errors
///
/// - `ValidationError::InvalidSplit`: `base_bonus_split` is outside [0, 1].
/// - `ValidationError::InvalidWeight`: a weight is NaN or infinite.
pub fn validate_config(config: &AllocationConfig) -> Result<(), ValidationError> {
    let split = config.base_bonus_split;
    if !(0.0..=1.0).contains(&split) {
        return Err(ValidationError::InvalidSplit { value: split });
    }

    for metric in Metric::ALL {
        let value = config.weights.weight(metric);
        if !value.is_finite() {
            return Err(ValidationError::InvalidWeight { metric, value });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(id: &str) -> SalesAgent {
        SalesAgent::new(id, 80.0, 12.0, 95.0, 10.0)
    }

    #[test]
    fn test_valid_agents_pass() {
        assert!(validate_agents(&[agent("A1"), agent("A2")]).is_ok());
        assert!(validate_agents(&[]).is_ok());
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = validate_agents(&[agent("A1"), agent("")]).unwrap_err();
        assert_eq!(err, ValidationError::EmptyAgentId { index: 1 });
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = validate_agents(&[agent("A1"), agent("A2"), agent("A1")]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateAgentId {
                id: "A1".to_string()
            }
        );
    }

    #[test]
    fn test_negative_metric_rejected() {
        let mut bad = agent("A2");
        bad.active_clients = -1.0;
        let err = validate_agents(&[agent("A1"), bad]).unwrap_err();
        match err {
            ValidationError::InvalidMetric { id, metric, value } => {
                assert_eq!(id, "A2");
                assert_eq!(metric, Metric::ActiveClients);
                assert_eq!(value, -1.0);
            }
            other => panic!("Expected InvalidMetric, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_metric_rejected() {
        let mut bad = agent("A1");
        bad.performance_score = f64::NAN;
        assert!(matches!(
            validate_agents(&[bad]),
            Err(ValidationError::InvalidMetric {
                metric: Metric::PerformanceScore,
                ..
            })
        ));
    }

    #[test]
    fn test_split_bounds() {
        for split in [0.0, 0.5, 1.0] {
            let config = AllocationConfig::default().with_base_bonus_split(split);
            assert!(validate_config(&config).is_ok(), "split {split} should pass");
        }
        for split in [-0.1, 1.01, f64::NAN, f64::INFINITY] {
            let config = AllocationConfig::default().with_base_bonus_split(split);
            assert!(
                matches!(
                    validate_config(&config),
                    Err(ValidationError::InvalidSplit { .. })
                ),
                "split {split} should fail"
            );
        }
    }

    #[test]
    fn test_negative_weight_allowed_but_infinite_rejected() {
        let mut config = AllocationConfig::default();
        config.weights.seniority_months = -0.5;
        assert!(validate_config(&config).is_ok());

        config.weights.active_clients = f64::INFINITY;
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidWeight {
                metric: Metric::ActiveClients,
                ..
            }
        ));
    }
}
