//! Ephemeral execution plans for approval-gated commands
//!
//! High-risk intents can be staged as an [`ActionPlan`] the user must
//! approve before execution. Plans live only for the request lifecycle
//! plus a short TTL; nothing is persisted.

use crate::intent::Params;
use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const DEFAULT_PLAN_TTL_MS: i64 = 10 * 60 * 1000;

/// Planner settings
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// How long a staged plan stays approvable, in milliseconds
    pub plan_ttl_ms: i64,
}

impl PlannerConfig {
    pub fn new() -> Self {
        Self {
            plan_ttl_ms: DEFAULT_PLAN_TTL_MS,
        }
    }

    /// Build from `AGENT_PLAN_TTL_MS`; unparsable values fall back.
    pub fn from_env() -> Self {
        let plan_ttl_ms = std::env::var("AGENT_PLAN_TTL_MS")
            .ok()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_PLAN_TTL_MS);
        Self { plan_ttl_ms }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Inputs for staging a plan
#[derive(Debug, Clone)]
pub struct NewActionPlan {
    pub intent: String,
    pub params: Params,
    pub dependencies: Vec<String>,
    pub risks: Vec<String>,
    pub outputs: Vec<String>,
    pub confidence: f64,
}

/// A staged execution plan awaiting approval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub id: String,
    pub intent: String,
    pub params: Params,
    pub dependencies: Vec<String>,
    pub risks: Vec<String>,
    pub outputs: Vec<String>,
    /// Unix milliseconds
    pub created_at: i64,
    pub expires_at: i64,
    pub confidence: f64,
}

impl ActionPlan {
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at
    }
}

/// Stage a plan with a content-derived id and TTL expiry.
pub fn create_action_plan(input: NewActionPlan, config: &PlannerConfig) -> ActionPlan {
    let now = Utc::now().timestamp_millis();
    let hash_input = serde_json::json!({
        "intent": input.intent,
        "params": input.params,
        "now": now,
    });
    let digest = Sha256::digest(hash_input.to_string().as_bytes());
    let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();

    ActionPlan {
        id: format!("plan-{}", &hex[..10]),
        intent: input.intent,
        params: input.params,
        dependencies: input.dependencies,
        risks: input.risks,
        outputs: input.outputs,
        created_at: now,
        expires_at: now + config.plan_ttl_ms,
        confidence: input.confidence,
    }
}

/// Render a staged plan for the chat surface
pub fn format_plan_for_user(plan: &ActionPlan) -> String {
    let expires_at = Utc
        .timestamp_millis_opt(plan.expires_at)
        .single()
        .map(|t| t.to_rfc3339())
        .unwrap_or_default();
    let payload = serde_json::json!({
        "id": plan.id,
        "intent": plan.intent,
        "params": plan.params,
        "dependencies": plan.dependencies,
        "risks": plan.risks,
        "outputs": plan.outputs,
        "confidence": (plan.confidence * 100.0).round() / 100.0,
        "expiresAt": expires_at,
    });

    format!(
        "🧭 Execution plan prepared ({}).\n\n```json\n{}\n```\n\n\
         Reply with \"approve {}\" to execute, or \"cancel\" to discard.",
        plan.intent,
        serde_json::to_string_pretty(&payload).unwrap_or_default(),
        plan.id
    )
}
