//! Intent-based agent framework for GitSplits
//!
//! Maps free-form command text to registered intents, dispatches matched
//! intents against a registry of collaborator tools, and plans gated
//! executions for high-risk commands.

mod agent;
mod assist;
mod error;
mod intent;
pub mod intents;
mod planner;
mod repo;
mod tools;

pub use agent::{Agent, IntentMatch};
pub use assist::{assist_intent, format_assisted_suggestion, AssistSource, AssistedIntent};
pub use error::AgentError;
pub use intent::{param_f64, param_str, Context, Intent, IntentResult, Params};
pub use planner::{create_action_plan, format_plan_for_user, ActionPlan, NewActionPlan, PlannerConfig};
pub use repo::{extract_first_repo, normalize_repo_url};
pub use tools::{
    DistributionReceipt, DistributionRequest, GithubTool, NearTool, PaymentEngine, PaymentTool,
    PendingClaim, Recipient, RepoAnalysis, RepoAnalyzer, ReputationTool, Split, SplitLedger, Tool,
    ToolRegistry,
};
