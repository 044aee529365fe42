//! Allocation request and result documents.

use serde::{Deserialize, Serialize};

use super::agent::SalesAgent;
use super::error::Result;

/// Input document: the kitty and the agents sharing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRequest {
    /// Total pool, in the smallest currency unit.
    ///
    /// Pool arithmetic is exact up to 2^53 units; above that the proportional
    /// shares are approximate but the kitty is still fully allocated.
    pub site_kitty: u64,
    #[serde(default)]
    pub sales_agents: Vec<SalesAgent>,
}

impl AllocationRequest {
    /// Parse an input document.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Amount assigned to one agent and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRecord {
    pub id: String,
    pub assigned_discount: u64,
    pub justification: String,
}

/// Outcome of one allocation call.
///
/// # Invariants
///
/// `allocations` follows input agent order and
/// `total_allocated + remaining_kitty` equals the kitty. For a non-empty
/// agent list `remaining_kitty` is 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResult {
    pub allocations: Vec<AllocationRecord>,
    pub total_allocated: u64,
    pub remaining_kitty: u64,
}

impl AllocationResult {
    /// Result for an empty agent list: nothing allocated, kitty untouched.
    pub fn empty(site_kitty: u64) -> Self {
        Self {
            allocations: Vec::new(),
            total_allocated: 0,
            remaining_kitty: site_kitty,
        }
    }

    /// Whether the whole kitty was handed out.
    pub fn is_exhausted(&self) -> bool {
        self.remaining_kitty == 0
    }

    /// Look up the record for an agent id.
    pub fn allocation_for(&self, id: &str) -> Option<&AllocationRecord> {
        self.allocations.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_parses_input_document() {
        let request = AllocationRequest::from_json_str(
            r#"{
                "siteKitty": 10000,
                "salesAgents": [
                    {"id":"A1","performanceScore":90,"seniorityMonths":18,"targetAchievedPercent":85,"activeClients":12}
                ]
            }"#,
        )
        .expect("parse request");
        assert_eq!(request.site_kitty, 10000);
        assert_eq!(request.sales_agents.len(), 1);
        assert_eq!(request.sales_agents[0].id, "A1");
    }

    #[test]
    fn test_request_without_agents_is_empty() {
        let request = AllocationRequest::from_json_str(r#"{"siteKitty": 500}"#).expect("parse");
        assert!(request.sales_agents.is_empty());
    }

    #[test]
    fn test_request_rejects_fractional_kitty() {
        assert!(AllocationRequest::from_json_str(r#"{"siteKitty": 10.5}"#).is_err());
        assert!(AllocationRequest::from_json_str(r#"{"salesAgents": []}"#).is_err());
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = AllocationResult {
            allocations: vec![AllocationRecord {
                id: "A1".to_string(),
                assigned_discount: 100,
                justification: "because".to_string(),
            }],
            total_allocated: 100,
            remaining_kitty: 0,
        };
        let raw = serde_json::to_value(&result).expect("serialize");
        assert_eq!(
            raw,
            json!({
                "allocations": [
                    {"id": "A1", "assignedDiscount": 100, "justification": "because"}
                ],
                "totalAllocated": 100,
                "remainingKitty": 0
            })
        );
    }

    #[test]
    fn test_empty_result() {
        let result = AllocationResult::empty(42);
        assert!(result.allocations.is_empty());
        assert_eq!(result.total_allocated, 0);
        assert_eq!(result.remaining_kitty, 42);
        assert!(!result.is_exhausted());
        assert!(result.allocation_for("A1").is_none());
    }
}
