// Shared across test binaries; not every binary uses every helper.
#![allow(dead_code)]

use gitsplits_agent::{
    intents::register_default_intents, Agent, DistributionReceipt, DistributionRequest,
    GithubTool, NearTool, PaymentEngine, PaymentTool, PendingClaim, RepoAnalysis, RepoAnalyzer,
    ReputationTool, Split, SplitLedger,
};
use gitsplits_core::{AllocationEntry, ContributorRaw};
use gitsplits_reputation::ReputationConfig;
use std::collections::HashMap;
use std::sync::Mutex;

pub struct FakeAnalyzer {
    pub contributors: Vec<ContributorRaw>,
}

impl RepoAnalyzer for FakeAnalyzer {
    fn analyze(&self, repo_url: &str) -> anyhow::Result<RepoAnalysis> {
        Ok(RepoAnalysis {
            repo_url: repo_url.to_string(),
            total_commits: 128,
            contributors: self.contributors.clone(),
        })
    }
}

#[derive(Default)]
pub struct FakeLedger {
    pub splits: Mutex<HashMap<String, Split>>,
    pub wallets: HashMap<String, String>,
    pub pending: Vec<PendingClaim>,
}

impl SplitLedger for FakeLedger {
    fn get_split(&self, repo_url: &str) -> anyhow::Result<Option<Split>> {
        Ok(self.splits.lock().unwrap().get(repo_url).cloned())
    }

    fn create_split(
        &self,
        repo_url: &str,
        contributors: &[AllocationEntry],
    ) -> anyhow::Result<Split> {
        let split = Split {
            id: format!("split-{}", self.splits.lock().unwrap().len() + 1),
            repo_url: repo_url.to_string(),
            contributors: contributors.to_vec(),
        };
        self.splits
            .lock()
            .unwrap()
            .insert(repo_url.to_string(), split.clone());
        Ok(split)
    }

    fn update_split(
        &self,
        split_id: &str,
        contributors: &[AllocationEntry],
    ) -> anyhow::Result<Split> {
        let mut splits = self.splits.lock().unwrap();
        let split = splits
            .values_mut()
            .find(|s| s.id == split_id)
            .ok_or_else(|| anyhow::anyhow!("unknown split: {split_id}"))?;
        split.contributors = contributors.to_vec();
        Ok(split.clone())
    }

    fn verified_wallet(&self, github_username: &str) -> anyhow::Result<Option<String>> {
        Ok(self.wallets.get(github_username).cloned())
    }

    fn pending_claims(&self, _target: &str) -> anyhow::Result<Vec<PendingClaim>> {
        Ok(self.pending.clone())
    }
}

pub struct FakePayments;

impl PaymentEngine for FakePayments {
    fn distribute(&self, _request: &DistributionRequest) -> anyhow::Result<DistributionReceipt> {
        Ok(DistributionReceipt {
            tx_hash: "0xdeadbeef".to_string(),
        })
    }
}

pub fn contributor(username: &str, percentage: f64) -> ContributorRaw {
    ContributorRaw {
        username: username.to_string(),
        percentage,
    }
}

/// Agent wired with the default intent set and fake collaborators.
pub fn agent_with_fakes(analyzer: FakeAnalyzer, ledger: FakeLedger) -> Agent {
    let mut agent = Agent::new();
    register_default_intents(&mut agent);
    agent.register_tool(Box::new(GithubTool::new(Box::new(analyzer))));
    agent.register_tool(Box::new(NearTool::new(Box::new(ledger))));
    agent.register_tool(Box::new(PaymentTool::new(Box::new(FakePayments))));
    agent.register_tool(Box::new(ReputationTool::new(ReputationConfig::new())));
    agent
}
