//! Analyze intent: contribution breakdown for a repository
//!
//! Examples:
//! - "analyze near-sdk-rs"
//! - "who contributes to github.com/near/near-sdk-rs"
//! - "show contributors for facebook/react"

use crate::intent::{param_str, Context, Intent, IntentResult, Params};
use crate::repo::normalize_repo_url;
use crate::tools::{GithubTool, NearTool, ToolRegistry};
use regex::{Captures, Regex};

pub struct AnalyzeIntent {
    patterns: Vec<Regex>,
}

impl AnalyzeIntent {
    pub fn new() -> Self {
        Self {
            patterns: vec![
                Regex::new(r"(?i)analyze\s+(.+)").unwrap(),
                Regex::new(r"(?i)who\s+(?:contributes?\s+to|works?\s+on)\s+(.+)").unwrap(),
                Regex::new(r"(?i)show\s+(?:me\s+)?(?:the\s+)?contributors?\s+(?:for|of)\s+(.+)")
                    .unwrap(),
            ],
        }
    }
}

impl Default for AnalyzeIntent {
    fn default() -> Self {
        Self::new()
    }
}

impl Intent for AnalyzeIntent {
    fn name(&self) -> &str {
        "analyze"
    }

    fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    fn extract_params(&self, captures: &Captures) -> Params {
        let mut params = Params::new();
        params.insert(
            "repo".to_string(),
            serde_json::json!(captures[1].trim()),
        );
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
        let github = tools.get_as::<GithubTool>("github")?;
        let analysis = github.analyzer.analyze(&repo_url)?;

        if analysis.contributors.is_empty() {
            return Ok(IntentResult::new(format!(
                "No contributors found for {repo_url}. Make sure it's a public repository \
                 with commit history."
            )));
        }

        let medals = ["🥇", "🥈", "🥉"];
        let top_contributors = analysis
            .contributors
            .iter()
            .take(5)
            .enumerate()
            .map(|(i, c)| {
                let marker = medals.get(i).copied().unwrap_or("•");
                format!("{marker} {}: {:.1}%", c.username, c.percentage)
            })
            .collect::<Vec<_>>()
            .join("\n");
        let overflow = if analysis.contributors.len() > 5 {
            format!("\n...and {} more", analysis.contributors.len() - 5)
        } else {
            String::new()
        };

        // Proactive verification coverage so maintainers can invite
        // contributors early; skipped when no ledger is registered.
        let mut coverage = String::new();
        if tools.has("near") {
            let near = tools.get_as::<NearTool>("near")?;
            let sample: Vec<_> = analysis.contributors.iter().take(10).collect();
            let mut verified = 0usize;
            for contributor in &sample {
                if near.ledger.verified_wallet(&contributor.username)?.is_some() {
                    verified += 1;
                }
            }
            coverage = format!(
                "\n\n✅ Verification coverage (top {}): {verified}/{} verified\n\
                 Invite unverified contributors: https://gitsplits.xyz/verify",
                sample.len(),
                sample.len()
            );
        }

        context.insert(
            "last_analysis".to_string(),
            serde_json::json!({
                "repo_url": repo_url,
                "contributors": analysis.contributors,
            }),
        );

        Ok(IntentResult::new(format!(
            "📊 Analysis for {repo_url}\n\nTotal commits: {}\nContributors: {}\n\n\
             Top contributors:\n{top_contributors}{overflow}{coverage}\n\n\
             Create a split: \"@gitsplits create {repo_url}\"",
            analysis.total_commits,
            analysis.contributors.len(),
        )))
    }
}
