//! Routing planner: risk classification and execution-plane selection
//!
//! Mutating/financial commands default to requiring the attested plane and
//! disallow silent fallback to an unattested plane unless explicitly
//! overridden in [`RoutingConfig`].

use crate::config::RoutingConfig;
use crate::types::{AgentPlane, AgentRisk, AgentRoutingPlan};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static MENTION_RE: OnceLock<Regex> = OnceLock::new();
static SCHEME_RE: OnceLock<Regex> = OnceLock::new();
static LOOPBACK_RE: OnceLock<Regex> = OnceLock::new();

/// Strip a leading `@gitsplits` mention token (case-insensitive) and trim
fn normalize_command_text(input: &str) -> String {
    let re = MENTION_RE.get_or_init(|| Regex::new(r"(?i)^@?gitsplits\s+").unwrap());
    re.replace(input.trim(), "").trim().to_string()
}

/// Intent is the lowercased first whitespace-delimited token
fn infer_intent(command_text: &str) -> String {
    command_text
        .split_whitespace()
        .next()
        .map(|t| t.to_lowercase())
        .unwrap_or_default()
}

fn is_high_risk_intent(intent: &str) -> bool {
    matches!(intent, "create" | "pay" | "approve")
}

fn is_cacheable_intent(intent: &str) -> bool {
    matches!(intent, "analyze" | "pending" | "reputation")
}

/// Classify a command into a risk tier and pick an execution plane.
pub fn build_agent_routing_plan(text: &str, config: &RoutingConfig) -> AgentRoutingPlan {
    let normalized_text = normalize_command_text(text);
    let intent = infer_intent(&normalized_text);
    let risk = if is_high_risk_intent(&intent) {
        AgentRisk::High
    } else {
        AgentRisk::Low
    };

    let require_attestation =
        risk == AgentRisk::High && config.require_attestation_for_high_risk;

    let preferred = if risk == AgentRisk::High {
        AgentPlane::Eigen
    } else {
        AgentPlane::Hetzner
    };
    let allow_fallback = risk == AgentRisk::Low || config.allow_high_risk_fallback;

    let plan = AgentRoutingPlan {
        cacheable: is_cacheable_intent(&intent),
        fallbacks: vec![preferred.other()],
        normalized_text,
        intent,
        risk,
        require_attestation,
        preferred,
        allow_fallback,
    };

    tracing::debug!(
        intent = %plan.intent,
        risk = ?plan.risk,
        preferred = plan.preferred.as_str(),
        "routing plan built"
    );

    plan
}

/// One-line summary for logs and chat replies
pub fn format_routing_summary(plan: &AgentRoutingPlan) -> String {
    format!(
        "intent={} risk={} preferred={} attestation={} fallback={}",
        if plan.intent.is_empty() {
            "unknown"
        } else {
            &plan.intent
        },
        match plan.risk {
            AgentRisk::Low => "low",
            AgentRisk::High => "high",
        },
        plan.preferred.as_str(),
        if plan.require_attestation {
            "required"
        } else {
            "optional"
        },
        if plan.allow_fallback {
            "enabled"
        } else {
            "disabled"
        },
    )
}

/// Resolved base URLs per execution plane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaneBaseUrls {
    pub hetzner: Option<String>,
    pub eigen: Option<String>,
}

/// Normalize configured hostnames into full base URLs.
///
/// Bare hostnames get `https://` (or `http://` for loopback patterns),
/// trailing slashes are trimmed, and a plane without its own URL falls
/// back to the shared base URL.
pub fn agent_plane_base_urls(config: &RoutingConfig) -> PlaneBaseUrls {
    let base = normalize_base_url(config.base_url.as_deref());
    PlaneBaseUrls {
        hetzner: normalize_base_url(config.hetzner_base_url.as_deref()).or_else(|| base.clone()),
        eigen: normalize_base_url(config.eigen_base_url.as_deref()).or(base),
    }
}

fn normalize_base_url(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    let scheme_re = SCHEME_RE.get_or_init(|| Regex::new(r"(?i)^https?://").unwrap());
    if scheme_re.is_match(trimmed) {
        return Some(trimmed.to_string());
    }

    let loopback_re = LOOPBACK_RE
        .get_or_init(|| Regex::new(r"(?i)^(localhost|127\.0\.0\.1|0\.0\.0\.0)(:\d+)?$").unwrap());
    if loopback_re.is_match(trimmed) {
        return Some(format!("http://{trimmed}"));
    }

    Some(format!("https://{trimmed}"))
}
