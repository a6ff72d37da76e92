//! Create intent: create or refresh an on-chain split
//!
//! Examples:
//! - "create split for near-sdk-rs"
//! - "set up payments for github.com/near/near-sdk-rs"
//! - "make a split for facebook/react with 50/30/20"

use crate::intent::{param_str, Context, Intent, IntentResult, Params};
use crate::repo::normalize_repo_url;
use crate::tools::{GithubTool, NearTool, ToolRegistry};
use gitsplits_allocation::build_contributors_with_quality;
use gitsplits_core::AllocationEntry;
use gitsplits_reputation::evaluate_contributor;
use regex::{Captures, Regex};
use std::sync::OnceLock;

static CUSTOM_ALLOCATION_RE: OnceLock<Regex> = OnceLock::new();

pub struct CreateIntent {
    patterns: Vec<Regex>,
}

impl CreateIntent {
    pub fn new() -> Self {
        Self {
            patterns: vec![
                Regex::new(r"(?i)create\s+(?:a\s+)?(?:split\s+)?(?:for\s+)?(.+)").unwrap(),
                Regex::new(r"(?i)set\s+up\s+(?:payments?\s+)?(?:for\s+)?(.+)").unwrap(),
                Regex::new(r"(?i)make\s+(?:a\s+)?(?:split\s+)?(?:for\s+)?(.+)").unwrap(),
            ],
        }
    }
}

impl Default for CreateIntent {
    fn default() -> Self {
        Self::new()
    }
}

impl Intent for CreateIntent {
    fn name(&self) -> &str {
        "create"
    }

    fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    fn extract_params(&self, captures: &Captures) -> Params {
        let full_match = captures[1].trim().to_string();
        let mut params = Params::new();

        // Custom allocation, e.g. "facebook/react with 50/30/20"
        let re = CUSTOM_ALLOCATION_RE
            .get_or_init(|| Regex::new(r"(.+?)\s+(?:with\s+)?(\d+(?:/\d+)+)\s*$").unwrap());
        if let Some(alloc_caps) = re.captures(&full_match) {
            params.insert(
                "repo".to_string(),
                serde_json::json!(alloc_caps[1].trim()),
            );
            params.insert("allocation".to_string(), serde_json::json!(&alloc_caps[2]));
        } else {
            params.insert("repo".to_string(), serde_json::json!(full_match));
            // Contribution-based allocation
            params.insert("allocation".to_string(), serde_json::json!("default"));
        }
        params
    }

    fn validate(&self, params: &Params) -> Result<(), String> {
        match param_str(params, "repo") {
            Some(repo) if !repo.is_empty() => Ok(()),
            _ => Err("Repository is required".to_string()),
        }
    }

    fn execute(
        &self,
        params: &Params,
        context: &mut Context,
        tools: &ToolRegistry,
    ) -> anyhow::Result<IntentResult> {
        let repo_url = normalize_repo_url(param_str(params, "repo").unwrap_or_default());
        let allocation = param_str(params, "allocation").unwrap_or("default");

        let near = tools.get_as::<NearTool>("near")?;
        let github = tools.get_as::<GithubTool>("github")?;

        let existing = near.ledger.get_split(&repo_url)?;
        let analysis = github.analyzer.analyze(&repo_url)?;

        if analysis.contributors.is_empty() {
            return Ok(IntentResult::new(format!(
                "No contributors found for {repo_url}. Make sure it's a public repository."
            )));
        }

        let contributors: Vec<AllocationEntry> = if allocation == "default" {
            // Quality-adjusted contribution-based allocation
            let decisions: Vec<_> = analysis
                .contributors
                .iter()
                .map(|c| evaluate_contributor(&c.username))
                .collect();
            build_contributors_with_quality(&analysis.contributors, &decisions)
        } else {
            // Explicit percentages, e.g. "50/30/20", mapped onto the top
            // contributors in order
            let percentages: Vec<f64> = allocation
                .split('/')
                .map(|p| p.trim().parse().unwrap_or(0.0))
                .collect();
            analysis
                .contributors
                .iter()
                .take(percentages.len())
                .enumerate()
                .map(|(i, c)| AllocationEntry {
                    github_username: c.username.clone(),
                    percentage: percentages[i],
                })
                .collect()
        };

        let split = match &existing {
            Some(split) => near.ledger.update_split(&split.id, &contributors)?,
            None => near.ledger.create_split(&repo_url, &contributors)?,
        };

        let top_contributors = contributors
            .iter()
            .take(5)
            .map(|c| format!("- {}: {:.1}%", c.github_username, c.percentage))
            .collect::<Vec<_>>()
            .join("\n");
        let overflow = if contributors.len() > 5 {
            format!("\n...and {} more", contributors.len() - 5)
        } else {
            String::new()
        };

        let mut verified = 0usize;
        let mut unverified = Vec::new();
        for contributor in &contributors {
            if near.ledger.verified_wallet(&contributor.github_username)?.is_some() {
                verified += 1;
            } else {
                unverified.push(contributor.github_username.clone());
            }
        }
        let coverage_line =
            format!("Verification coverage: {verified}/{} verified", contributors.len());
        let unverified_line = if unverified.is_empty() {
            String::new()
        } else {
            format!(
                "\nNeed verification: {}",
                unverified
                    .iter()
                    .take(5)
                    .map(|u| format!("@{u}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        };

        let headline = if existing.is_some() {
            format!("✅ Split updated for {repo_url}!")
        } else {
            format!("✅ Split created for {repo_url}!")
        };

        context.insert(
            "last_split".to_string(),
            serde_json::json!({
                "id": split.id,
                "repo_url": repo_url,
            }),
        );

        Ok(IntentResult::new(format!(
            "{headline}\n\n📜 Split ID: {}\n\n\
             Top contributors:\n{top_contributors}{overflow}\n\n\
             {coverage_line}{unverified_line}\n\n\
             To pay them: \"@gitsplits pay 100 USDC to {repo_url}\"",
            split.id,
        )))
    }
}
