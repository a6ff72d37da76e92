//! Reputation intent: profile and payout eligibility for a username
//!
//! Examples:
//! - "reputation for alice"
//! - "is dependabot-bot eligible"

use crate::intent::{param_str, Context, Intent, IntentResult, Params};
use crate::tools::{NearTool, ReputationTool, ToolRegistry};
use regex::{Captures, Regex};

pub struct ReputationIntent {
    patterns: Vec<Regex>,
}

impl ReputationIntent {
    pub fn new() -> Self {
        Self {
            patterns: vec![
                Regex::new(r"(?i)reputation\s+(?:for\s+)?@?([A-Za-z0-9_.\-\[\]]+)").unwrap(),
                Regex::new(r"(?i)is\s+@?([A-Za-z0-9_.\-\[\]]+)\s+(?:eligible|trusted|reputable)")
                    .unwrap(),
            ],
        }
    }
}

impl Default for ReputationIntent {
    fn default() -> Self {
        Self::new()
    }
}

impl Intent for ReputationIntent {
    fn name(&self) -> &str {
        "reputation"
    }

    fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    fn extract_params(&self, captures: &Captures) -> Params {
        let mut params = Params::new();
        params.insert("subject".to_string(), serde_json::json!(captures[1].trim()));
        params
    }

    fn validate(&self, params: &Params) -> Result<(), String> {
        match param_str(params, "subject") {
            Some(subject) if !subject.is_empty() => Ok(()),
            _ => Err("A GitHub username is required".to_string()),
        }
    }

    fn execute(
        &self,
        params: &Params,
        _context: &mut Context,
        tools: &ToolRegistry,
    ) -> anyhow::Result<IntentResult> {
        let subject = param_str(params, "subject").unwrap_or_default();
        let reputation = tools.get_as::<ReputationTool>("reputation")?;

        // Wallet linkage comes from the ledger when one is registered
        let wallet = if tools.has("near") {
            tools
                .get_as::<NearTool>("near")?
                .ledger
                .verified_wallet(subject)?
        } else {
            None
        };

        let eligibility = reputation.payout_eligibility(subject, wallet.as_deref());
        let profile = &eligibility.profile;

        let status = if eligibility.eligible {
            "✅ Eligible for payouts".to_string()
        } else {
            format!("⚠️ Not eligible:\n{}", eligibility.reasons.join("\n"))
        };

        Ok(IntentResult::new(format!(
            "🧾 Reputation for @{subject}\n\n\
             Kind: {}\nScore: {}\nTier: {}\n\n{status}",
            profile.kind.as_str(),
            profile.score,
            profile.tier.as_str(),
        )))
    }
}
