//! Pending intent: payouts blocked on verification
//!
//! Examples:
//! - "pending claims for near/near-sdk-rs"
//! - "show pending for alice"

use crate::intent::{param_str, Context, Intent, IntentResult, Params};
use crate::tools::{NearTool, ToolRegistry};
use regex::{Captures, Regex};

pub struct PendingIntent {
    patterns: Vec<Regex>,
}

impl PendingIntent {
    pub fn new() -> Self {
        Self {
            patterns: vec![
                Regex::new(r"(?i)pending\s+(?:claims?\s+)?(?:for\s+)?(.+)").unwrap(),
                Regex::new(r"(?i)show\s+pending\s+(?:claims?\s+)?(?:for\s+)?(.+)").unwrap(),
            ],
        }
    }
}

impl Default for PendingIntent {
    fn default() -> Self {
        Self::new()
    }
}

impl Intent for PendingIntent {
    fn name(&self) -> &str {
        "pending"
    }

    fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    fn extract_params(&self, captures: &Captures) -> Params {
        let mut params = Params::new();
        params.insert("target".to_string(), serde_json::json!(captures[1].trim()));
        params
    }

    fn validate(&self, params: &Params) -> Result<(), String> {
        match param_str(params, "target") {
            Some(target) if !target.is_empty() => Ok(()),
            _ => Err("A repository or username is required".to_string()),
        }
    }

    fn execute(
        &self,
        params: &Params,
        _context: &mut Context,
        tools: &ToolRegistry,
    ) -> anyhow::Result<IntentResult> {
        let target = param_str(params, "target").unwrap_or_default();
        let near = tools.get_as::<NearTool>("near")?;
        let claims = near.ledger.pending_claims(target)?;

        if claims.is_empty() {
            return Ok(IntentResult::new(format!("No pending claims for {target}.")));
        }

        let lines = claims
            .iter()
            .map(|c| format!("- {}: {} {}", c.github_username, c.amount, c.token))
            .collect::<Vec<_>>()
            .join("\n");

        Ok(IntentResult::new(format!(
            "⏳ Pending claims for {target}:\n\n{lines}\n\n\
             Claims release automatically once the contributor verifies a wallet."
        )))
    }
}
