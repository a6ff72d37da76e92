//! Core types and routing policy for the GitSplits agent

mod config;
mod routing;
mod types;

pub use config::RoutingConfig;
pub use routing::{
    agent_plane_base_urls, build_agent_routing_plan, format_routing_summary, PlaneBaseUrls,
};
pub use types::{
    AgentPlane, AgentRisk, AgentRoutingPlan, AllocationEntry, ContributorRaw, CreditAction,
    QualityDecision,
};
