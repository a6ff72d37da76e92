//! Heuristic intent assistant
//!
//! Maps free-form natural language (not just rigid command syntax) to a
//! known intent with extracted parameters and a confidence estimate. An
//! LLM collaborator can produce the same shape out-of-process; this module
//! is the deterministic fallback the tests pin down.

use crate::intent::Params;
use crate::repo::extract_first_repo;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static PAY_RE: OnceLock<Regex> = OnceLock::new();

/// Where an assisted classification came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistSource {
    Heuristic,
    Llm,
}

/// An inferred intent with parameters and supporting rationale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistedIntent {
    pub intent_name: String,
    pub params: Params,
    pub confidence: f64,
    pub outcomes: Vec<String>,
    pub rationale: String,
    pub source: AssistSource,
}

fn outcomes(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Infer an intent from free-form text; `None` when no pattern matches.
pub fn assist_intent(text: &str) -> Option<AssistedIntent> {
    let lower = text.to_lowercase();
    let repo = extract_first_repo(text);

    if (lower.contains("analy") || lower.contains("contributor")) && repo.is_some() {
        let mut params = Params::new();
        params.insert("repo".to_string(), serde_json::json!(repo.unwrap()));
        return Some(AssistedIntent {
            intent_name: "analyze".to_string(),
            params,
            confidence: 0.72,
            outcomes: outcomes(&[
                "Fetch contributor history",
                "Compute verification coverage",
                "Propose next split action",
            ]),
            rationale: "Detected repository analysis intent.".to_string(),
            source: AssistSource::Heuristic,
        });
    }

    if (lower.contains("create") || lower.contains("split") || lower.contains("distribution"))
        && repo.is_some()
    {
        let mut params = Params::new();
        params.insert("repo".to_string(), serde_json::json!(repo.unwrap()));
        params.insert("allocation".to_string(), serde_json::json!("default"));
        return Some(AssistedIntent {
            intent_name: "create".to_string(),
            params,
            confidence: 0.69,
            outcomes: outcomes(&[
                "Create/refresh split",
                "Map contributors to percentages",
                "Report verification gaps",
            ]),
            rationale: "Detected split creation intent.".to_string(),
            source: AssistSource::Heuristic,
        });
    }

    let pay_re = PAY_RE.get_or_init(|| {
        Regex::new(r"(?i)(?:pay|send|distribute)\s+(\d+(?:\.\d+)?)\s*([A-Za-z0-9]+)?").unwrap()
    });
    if let (Some(caps), Some(repo)) = (pay_re.captures(text), repo.as_deref()) {
        let amount: f64 = caps[1].parse().unwrap_or(0.0);
        let token = caps
            .get(2)
            .map(|m| m.as_str().to_uppercase())
            .unwrap_or_else(|| "NEAR".to_string());

        let mut params = Params::new();
        params.insert("amount".to_string(), serde_json::json!(amount));
        params.insert("token".to_string(), serde_json::json!(token));
        params.insert("repo".to_string(), serde_json::json!(repo));
        return Some(AssistedIntent {
            intent_name: "pay".to_string(),
            params,
            confidence: 0.7,
            outcomes: outcomes(&[
                "Validate verified recipients",
                "Apply payout policy",
                "Execute payment via configured engine",
            ]),
            rationale: "Detected payment intent with amount and repository.".to_string(),
            source: AssistSource::Heuristic,
        });
    }

    if (lower.contains("verify") || lower.contains("link wallet"))
        && (repo.is_some() || lower.contains('@'))
    {
        let mut params = Params::new();
        if let Some(repo) = repo {
            params.insert("repo".to_string(), serde_json::json!(repo));
        }
        return Some(AssistedIntent {
            intent_name: "verify".to_string(),
            params,
            confidence: 0.62,
            outcomes: outcomes(&[
                "Check current verification coverage",
                "Generate verification links",
                "Suggest outreach artifacts",
            ]),
            rationale: "Detected verification-related request.".to_string(),
            source: AssistSource::Heuristic,
        });
    }

    if lower.contains("pending") && repo.is_some() {
        let mut params = Params::new();
        params.insert("target".to_string(), serde_json::json!(repo.unwrap()));
        return Some(AssistedIntent {
            intent_name: "pending".to_string(),
            params,
            confidence: 0.65,
            outcomes: outcomes(&[
                "Fetch pending claims by contributor",
                "Summarize blocked payouts",
            ]),
            rationale: "Detected pending claims request.".to_string(),
            source: AssistSource::Heuristic,
        });
    }

    None
}

/// Render an assisted classification for the chat surface
pub fn format_assisted_suggestion(suggestion: &AssistedIntent) -> String {
    let source = match suggestion.source {
        AssistSource::Heuristic => "heuristic",
        AssistSource::Llm => "llm",
    };
    let outcomes = suggestion
        .outcomes
        .iter()
        .map(|o| format!("- {o}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "🤖 Hands-off intent interpretation ({source}, confidence {:.2}).\n\
         Intent: {}\n\
         Rationale: {}\n\n\
         Suggested outcomes:\n{outcomes}",
        suggestion.confidence, suggestion.intent_name, suggestion.rationale
    )
}
