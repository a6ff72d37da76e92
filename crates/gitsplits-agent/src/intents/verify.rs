//! Verify intent: wallet-verification links
//!
//! Examples:
//! - "verify contributors for near/near-sdk-rs"
//! - "verify @alice"
//! - "link my github alice"

use crate::intent::{param_str, Context, Intent, IntentResult, Params};
use crate::repo::normalize_repo_url;
use crate::tools::ToolRegistry;
use regex::{Captures, Regex};

const VERIFY_BASE_URL: &str = "https://gitsplits.xyz/verify";

pub struct VerifyIntent {
    patterns: Vec<Regex>,
}

impl VerifyIntent {
    pub fn new() -> Self {
        Self {
            patterns: vec![
                Regex::new(r"(?i)verify\s+contributors?\s+(?:for|of)\s+(?P<repo>.+)").unwrap(),
                Regex::new(r"(?i)verify\s+(?:my\s+)?(?:github\s+)?@?(?P<github_username>[A-Za-z0-9_.\-\[\]]+)")
                    .unwrap(),
                Regex::new(r"(?i)link\s+(?:my\s+)?(?:github\s+)?@?(?P<github_username>[A-Za-z0-9_.\-\[\]]+)")
                    .unwrap(),
                Regex::new(r"(?i)connect\s+(?:my\s+)?(?:github\s+)?@?(?P<github_username>[A-Za-z0-9_.\-\[\]]+)")
                    .unwrap(),
            ],
        }
    }
}

impl Default for VerifyIntent {
    fn default() -> Self {
        Self::new()
    }
}

impl Intent for VerifyIntent {
    fn name(&self) -> &str {
        "verify"
    }

    fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    fn extract_params(&self, captures: &Captures) -> Params {
        let mut params = Params::new();
        if let Some(repo) = captures.name("repo") {
            params.insert("repo".to_string(), serde_json::json!(repo.as_str().trim()));
        }
        if let Some(username) = captures.name("github_username") {
            // The repo-form pattern is tried first; a bare "contributors"
            // capture here means the command was malformed.
            let username = username.as_str().trim();
            if !username.eq_ignore_ascii_case("contributors")
                && !username.eq_ignore_ascii_case("contributor")
            {
                params.insert("github_username".to_string(), serde_json::json!(username));
            }
        }
        params
    }

    fn validate(&self, params: &Params) -> Result<(), String> {
        if param_str(params, "repo").is_none() && param_str(params, "github_username").is_none() {
            return Err("A repository or GitHub username is required".to_string());
        }
        Ok(())
    }

    fn execute(
        &self,
        params: &Params,
        _context: &mut Context,
        _tools: &ToolRegistry,
    ) -> anyhow::Result<IntentResult> {
        if let Some(repo) = param_str(params, "repo") {
            let repo_url = normalize_repo_url(repo);
            let repo_path = repo_url.trim_start_matches("github.com/");
            return Ok(IntentResult::new(format!(
                "🔗 Verification for {repo_url}\n\n\
                 Contributors can link their wallets here:\n\
                 {VERIFY_BASE_URL}?repo={repo_path}"
            )));
        }

        let username = param_str(params, "github_username").unwrap_or_default();
        Ok(IntentResult::new(format!(
            "🔗 Verify @{username}\n\n\
             Link a payout wallet to the GitHub account here:\n\
             {VERIFY_BASE_URL}?github={username}"
        )))
    }
}
