//! Sales agent records and the fixed metric set they are scored on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four metrics every agent is measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    PerformanceScore,
    SeniorityMonths,
    TargetAchievedPercent,
    ActiveClients,
}

impl Metric {
    /// All metrics, in canonical order.
    pub const ALL: [Metric; 4] = [
        Metric::PerformanceScore,
        Metric::SeniorityMonths,
        Metric::TargetAchievedPercent,
        Metric::ActiveClients,
    ];

    /// Wire name of the metric (matches the input document keys).
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::PerformanceScore => "performanceScore",
            Metric::SeniorityMonths => "seniorityMonths",
            Metric::TargetAchievedPercent => "targetAchievedPercent",
            Metric::ActiveClients => "activeClients",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per [`Metric`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValues {
    pub performance_score: f64,
    pub seniority_months: f64,
    pub target_achieved_percent: f64,
    pub active_clients: f64,
}

impl MetricValues {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::PerformanceScore => self.performance_score,
            Metric::SeniorityMonths => self.seniority_months,
            Metric::TargetAchievedPercent => self.target_achieved_percent,
            Metric::ActiveClients => self.active_clients,
        }
    }

    /// Build a value set by evaluating `f` once per metric.
    pub fn from_fn(mut f: impl FnMut(Metric) -> f64) -> Self {
        Self {
            performance_score: f(Metric::PerformanceScore),
            seniority_months: f(Metric::SeniorityMonths),
            target_achieved_percent: f(Metric::TargetAchievedPercent),
            active_clients: f(Metric::ActiveClients),
        }
    }

    /// Iterate `(metric, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}

/// A sales agent as supplied by the caller.
///
/// All four metrics are required; a record omitting one fails to
/// deserialize rather than producing a NaN score later on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesAgent {
    /// Unique agent identifier.
    pub id: String,
    /// Performance score, conventionally 0 to 100.
    pub performance_score: f64,
    /// Tenure in months.
    pub seniority_months: f64,
    /// Share of target achieved, in percent.
    pub target_achieved_percent: f64,
    /// Number of active clients.
    pub active_clients: f64,
}

impl SalesAgent {
    /// Create an agent record.
    pub fn new(
        id: impl Into<String>,
        performance_score: f64,
        seniority_months: f64,
        target_achieved_percent: f64,
        active_clients: f64,
    ) -> Self {
        Self {
            id: id.into(),
            performance_score,
            seniority_months,
            target_achieved_percent,
            active_clients,
        }
    }

    /// Raw metrics of this agent.
    pub fn metrics(&self) -> MetricValues {
        MetricValues {
            performance_score: self.performance_score,
            seniority_months: self.seniority_months,
            target_achieved_percent: self.target_achieved_percent,
            active_clients: self.active_clients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_deserializes_camel_case() {
        let agent: SalesAgent = serde_json::from_str(
            r#"{"id":"A1","performanceScore":90,"seniorityMonths":18,"targetAchievedPercent":85,"activeClients":12}"#,
        )
        .expect("deserialize");
        assert_eq!(agent, SalesAgent::new("A1", 90.0, 18.0, 85.0, 12.0));
    }

    #[test]
    fn test_agent_missing_metric_is_rejected() {
        let err = serde_json::from_str::<SalesAgent>(
            r#"{"id":"A1","performanceScore":90,"seniorityMonths":18,"targetAchievedPercent":85}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("activeClients"));
    }

    #[test]
    fn test_metric_values_get_matches_fields() {
        let agent = SalesAgent::new("A1", 1.0, 2.0, 3.0, 4.0);
        let values: Vec<f64> = agent.metrics().iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_metric_display_uses_wire_name() {
        assert_eq!(Metric::TargetAchievedPercent.to_string(), "targetAchievedPercent");
        let json = serde_json::to_string(&Metric::ActiveClients).expect("serialize");
        assert_eq!(json, "\"activeClients\"");
    }
}
