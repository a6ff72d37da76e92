//! Shared types for contribution analysis and command routing

use serde::{Deserialize, Serialize};

/// A contributor as reported by raw commit-count analysis.
///
/// Percentages for one repository sum to 100 (within floating tolerance).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributorRaw {
    pub username: String,
    pub percentage: f64,
}

/// Whether a contributor's raw contribution counts toward payout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditAction {
    FullCredit,
    PartialCredit,
    NoCredit,
}

/// Per-contributor trust decision produced by the quality evaluator.
///
/// Computed once per analysis pass and consumed immediately by the
/// allocation builder; never persisted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityDecision {
    pub username: String,
    /// Overall commit legitimacy/value in [0, 1]
    pub quality: f64,
    /// Confidence in the commit history behind the score, in [0, 1]
    pub commit_confidence: f64,
    pub credit_action: CreditAction,
    pub reasons: Vec<String>,
}

/// Final payout allocation row handed to the on-chain collaborator.
///
/// Username keeps the original casing from the raw contributor list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub github_username: String,
    pub percentage: f64,
}

/// Execution backend a routed command can be dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentPlane {
    /// General-purpose plane
    Hetzner,
    /// Attested/trusted-execution plane
    Eigen,
}

impl AgentPlane {
    pub fn other(self) -> Self {
        match self {
            AgentPlane::Hetzner => AgentPlane::Eigen,
            AgentPlane::Eigen => AgentPlane::Hetzner,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentPlane::Hetzner => "hetzner",
            AgentPlane::Eigen => "eigen",
        }
    }
}

/// Risk tier of an inbound command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentRisk {
    Low,
    High,
}

/// Routing decision for one inbound command.
///
/// Built fresh per command text; immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRoutingPlan {
    pub normalized_text: String,
    pub intent: String,
    pub risk: AgentRisk,
    pub require_attestation: bool,
    pub cacheable: bool,
    pub preferred: AgentPlane,
    pub allow_fallback: bool,
    pub fallbacks: Vec<AgentPlane>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_other() {
        assert_eq!(AgentPlane::Hetzner.other(), AgentPlane::Eigen);
        assert_eq!(AgentPlane::Eigen.other(), AgentPlane::Hetzner);
    }

    #[test]
    fn test_credit_action_serde_tags() {
        let json = serde_json::to_string(&CreditAction::NoCredit).unwrap();
        assert_eq!(json, "\"no_credit\"");

        let parsed: CreditAction = serde_json::from_str("\"partial_credit\"").unwrap();
        assert_eq!(parsed, CreditAction::PartialCredit);
    }

    #[test]
    fn test_routing_plan_roundtrip() {
        let plan = AgentRoutingPlan {
            normalized_text: "analyze near/near-sdk-rs".to_string(),
            intent: "analyze".to_string(),
            risk: AgentRisk::Low,
            require_attestation: false,
            cacheable: true,
            preferred: AgentPlane::Hetzner,
            allow_fallback: true,
            fallbacks: vec![AgentPlane::Eigen],
        };

        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"risk\":\"low\""));
        assert!(json.contains("\"preferred\":\"hetzner\""));

        let parsed: AgentRoutingPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, plan);
    }
}
