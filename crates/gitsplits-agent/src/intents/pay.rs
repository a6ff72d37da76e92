//! Pay intent: distribute funds across a split
//!
//! Examples:
//! - "pay 100 USDC to near-sdk-rs"
//! - "send 50 NEAR to github.com/near/near-sdk-rs"
//! - "distribute $200 to facebook/react"

use crate::intent::{param_f64, param_str, Context, Intent, IntentResult, Params};
use crate::repo::normalize_repo_url;
use crate::tools::{DistributionRequest, NearTool, PaymentTool, Recipient, ToolRegistry};
use regex::{Captures, Regex};

pub struct PayIntent {
    patterns: Vec<Regex>,
}

impl PayIntent {
    pub fn new() -> Self {
        Self {
            patterns: vec![
                Regex::new(r"(?i)pay\s+(\d+(?:\.\d+)?)\s*(\w+)\s+(?:to\s+)?(.+)").unwrap(),
                Regex::new(r"(?i)send\s+(\d+(?:\.\d+)?)\s*(\w+)\s+(?:to\s+)?(.+)").unwrap(),
                Regex::new(r"(?i)distribute\s+\$?(\d+(?:\.\d+)?)\s*(\w*)\s+(?:to\s+)?(.+)")
                    .unwrap(),
                Regex::new(r"(?i)give\s+(\d+(?:\.\d+)?)\s*(\w+)\s+(?:to\s+)?(.+)").unwrap(),
            ],
        }
    }
}

impl Default for PayIntent {
    fn default() -> Self {
        Self::new()
    }
}

impl Intent for PayIntent {
    fn name(&self) -> &str {
        "pay"
    }

    fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    fn extract_params(&self, captures: &Captures) -> Params {
        let amount: f64 = captures[1].parse().unwrap_or(0.0);
        let token = match captures.get(2).map(|m| m.as_str()) {
            Some(t) if !t.is_empty() => t.to_uppercase(),
            _ => "USDC".to_string(),
        };

        let mut params = Params::new();
        params.insert("amount".to_string(), serde_json::json!(amount));
        params.insert("token".to_string(), serde_json::json!(token));
        params.insert("repo".to_string(), serde_json::json!(captures[3].trim()));
        params
    }

    fn validate(&self, params: &Params) -> Result<(), String> {
        match param_f64(params, "amount") {
            Some(amount) if amount > 0.0 => {}
            _ => return Err("Amount must be a positive number".to_string()),
        }
        match param_str(params, "repo") {
            Some(repo) if !repo.is_empty() => Ok(()),
            _ => Err("Repository is required".to_string()),
        }
    }

    fn execute(
        &self,
        params: &Params,
        _context: &mut Context,
        tools: &ToolRegistry,
    ) -> anyhow::Result<IntentResult> {
        let amount = param_f64(params, "amount").unwrap_or(0.0);
        let token = param_str(params, "token").unwrap_or("USDC").to_string();
        let repo_url = normalize_repo_url(param_str(params, "repo").unwrap_or_default());

        let near = tools.get_as::<NearTool>("near")?;
        let Some(split) = near.ledger.get_split(&repo_url)? else {
            return Ok(IntentResult::new(format!(
                "No split found for {repo_url}. Create one first with: \
                 \"@gitsplits create {repo_url}\""
            )));
        };

        // Every contributor needs a verified wallet before funds move
        let mut recipients = Vec::new();
        let mut unverified = Vec::new();
        for contributor in &split.contributors {
            match near.ledger.verified_wallet(&contributor.github_username)? {
                Some(wallet) => recipients.push(Recipient {
                    wallet,
                    percentage: contributor.percentage,
                }),
                None => unverified.push(contributor.github_username.clone()),
            }
        }

        if !unverified.is_empty() {
            return Ok(IntentResult::new(format!(
                "Some contributors haven't verified their wallets yet: {}. \
                 They can verify at https://gitsplits.xyz/verify",
                unverified.join(", ")
            )));
        }

        let payment = tools.get_as::<PaymentTool>("pingpay")?;
        let receipt = payment.engine.distribute(&DistributionRequest {
            split_id: split.id.clone(),
            amount,
            token: token.clone(),
            recipients,
        })?;

        tracing::info!(split_id = %split.id, amount, token = %token, "distribution executed");

        Ok(IntentResult::new(format!(
            "✅ Paid {amount} {token} to {} contributors!\n\n\
             Transaction: {}\nSplit: {}",
            split.contributors.len(),
            receipt.tx_hash,
            split.id,
        )))
    }
}
