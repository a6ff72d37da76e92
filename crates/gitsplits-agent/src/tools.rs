//! Tool registry and collaborator interfaces
//!
//! The core never performs I/O itself: GitHub analysis, the NEAR split
//! ledger, and payment execution are injected behind narrow traits. Tools
//! are registered once at startup and only read during request handling.

use crate::error::AgentError;
use gitsplits_core::{AllocationEntry, ContributorRaw};
use gitsplits_reputation::{
    evaluate_payout_eligibility, profile_for, PayoutEligibility, ReputationConfig,
    ReputationProfile,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::HashMap;

/// A named capability an intent can request from the registry
pub trait Tool: Send + Sync {
    /// Unique registry name
    fn name(&self) -> &str;

    /// Downcast support for typed lookups
    fn as_any(&self) -> &dyn Any;
}

impl std::fmt::Debug for dyn Tool + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool").field("name", &self.name()).finish()
    }
}

/// Registry mapping tool names to tool instances.
///
/// Populated during the registration phase, read-only afterwards.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Look up a tool by name; unregistered names are an error, not `None`.
    pub fn get(&self, name: &str) -> Result<&dyn Tool, AgentError> {
        self.tools
            .get(name)
            .map(|t| t.as_ref())
            .ok_or_else(|| AgentError::ToolNotFound(name.to_string()))
    }

    /// Typed lookup: resolve a tool by name and downcast to its concrete type.
    pub fn get_as<T: Tool + 'static>(&self, name: &str) -> Result<&T, AgentError> {
        self.get(name)?
            .as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| AgentError::ToolType(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Result of contributor analysis for one repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoAnalysis {
    pub repo_url: String,
    pub total_commits: u64,
    pub contributors: Vec<ContributorRaw>,
}

/// GitHub contribution analysis collaborator
pub trait RepoAnalyzer: Send + Sync {
    fn analyze(&self, repo_url: &str) -> anyhow::Result<RepoAnalysis>;
}

/// An on-chain split record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    pub id: String,
    pub repo_url: String,
    pub contributors: Vec<AllocationEntry>,
}

/// A payout blocked on contributor verification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingClaim {
    pub github_username: String,
    pub amount: f64,
    pub token: String,
}

/// NEAR split-ledger collaborator
pub trait SplitLedger: Send + Sync {
    fn get_split(&self, repo_url: &str) -> anyhow::Result<Option<Split>>;
    fn create_split(&self, repo_url: &str, contributors: &[AllocationEntry])
        -> anyhow::Result<Split>;
    fn update_split(&self, split_id: &str, contributors: &[AllocationEntry])
        -> anyhow::Result<Split>;
    fn verified_wallet(&self, github_username: &str) -> anyhow::Result<Option<String>>;
    fn pending_claims(&self, target: &str) -> anyhow::Result<Vec<PendingClaim>>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    pub wallet: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionRequest {
    pub split_id: String,
    pub amount: f64,
    pub token: String,
    pub recipients: Vec<Recipient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionReceipt {
    pub tx_hash: String,
}

/// Payment execution collaborator
pub trait PaymentEngine: Send + Sync {
    fn distribute(&self, request: &DistributionRequest) -> anyhow::Result<DistributionReceipt>;
}

/// Registry wrapper around the GitHub analysis collaborator
pub struct GithubTool {
    pub analyzer: Box<dyn RepoAnalyzer>,
}

impl GithubTool {
    pub fn new(analyzer: Box<dyn RepoAnalyzer>) -> Self {
        Self { analyzer }
    }
}

impl std::fmt::Debug for GithubTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubTool").finish_non_exhaustive()
    }
}

impl Tool for GithubTool {
    fn name(&self) -> &str {
        "github"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Registry wrapper around the NEAR split ledger
pub struct NearTool {
    pub ledger: Box<dyn SplitLedger>,
}

impl NearTool {
    pub fn new(ledger: Box<dyn SplitLedger>) -> Self {
        Self { ledger }
    }
}

impl Tool for NearTool {
    fn name(&self) -> &str {
        "near"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Registry wrapper around the payment engine
pub struct PaymentTool {
    pub engine: Box<dyn PaymentEngine>,
}

impl PaymentTool {
    pub fn new(engine: Box<dyn PaymentEngine>) -> Self {
        Self { engine }
    }
}

impl Tool for PaymentTool {
    fn name(&self) -> &str {
        "pingpay"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Reputation scoring, in-process (no collaborator needed)
pub struct ReputationTool {
    pub config: ReputationConfig,
}

impl ReputationTool {
    pub fn new(config: ReputationConfig) -> Self {
        Self { config }
    }

    pub fn profile(&self, username: &str) -> ReputationProfile {
        profile_for(username)
    }

    pub fn payout_eligibility(
        &self,
        github_username: &str,
        wallet_address: Option<&str>,
    ) -> PayoutEligibility {
        evaluate_payout_eligibility(github_username, wallet_address, &self.config)
    }
}

impl Tool for ReputationTool {
    fn name(&self) -> &str {
        "reputation"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_lookup_fails_loudly() {
        let registry = ToolRegistry::new();
        let err = registry.get("github").unwrap_err();
        assert_eq!(err.to_string(), "Tool not found: github");
    }

    #[test]
    fn test_register_and_typed_lookup() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(ReputationTool::new(ReputationConfig::new())));

        assert!(registry.has("reputation"));
        let tool = registry.get_as::<ReputationTool>("reputation").unwrap();
        assert_eq!(tool.name(), "reputation");
    }

    #[test]
    fn test_typed_lookup_rejects_wrong_type() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(ReputationTool::new(ReputationConfig::new())));

        let err = registry.get_as::<GithubTool>("reputation").unwrap_err();
        assert!(matches!(err, AgentError::ToolType(_)));
    }

    #[test]
    fn test_reputation_tool_eligibility() {
        let tool = ReputationTool::new(ReputationConfig::new());
        let result = tool.payout_eligibility("example-user", None);
        assert!(!result.eligible);
        assert!(result.reasons.iter().any(|r| r.contains("wallet")));
    }
}
