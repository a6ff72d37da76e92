use gitsplits_core::{
    agent_plane_base_urls, build_agent_routing_plan, AgentPlane, AgentRisk, RoutingConfig,
};
use serial_test::serial;

#[test]
fn test_create_routes_to_attested_plane() {
    let plan = build_agent_routing_plan("@gitsplits create repo-x", &RoutingConfig::new());

    assert_eq!(plan.risk, AgentRisk::High);
    assert_eq!(plan.preferred, AgentPlane::Eigen);
    assert!(plan.require_attestation);
    assert!(!plan.allow_fallback);
    assert!(!plan.cacheable);
}

#[test]
fn test_analyze_routes_to_general_plane() {
    let plan = build_agent_routing_plan("@gitsplits analyze repo-x", &RoutingConfig::new());

    assert_eq!(plan.risk, AgentRisk::Low);
    assert_eq!(plan.preferred, AgentPlane::Hetzner);
    assert!(plan.cacheable);
    assert!(plan.allow_fallback);
    assert_eq!(plan.fallbacks, vec![AgentPlane::Eigen]);
}

#[test]
fn test_all_high_risk_intents() {
    for intent in ["create", "pay", "approve"] {
        let plan =
            build_agent_routing_plan(&format!("{intent} something"), &RoutingConfig::new());
        assert_eq!(plan.risk, AgentRisk::High, "intent {intent} should be high risk");
    }
}

#[test]
fn test_mention_strip_is_case_insensitive() {
    let plan = build_agent_routing_plan("@GitSplits pending near/near-sdk-rs", &RoutingConfig::new());
    assert_eq!(plan.intent, "pending");
    assert!(plan.cacheable);
}

#[test]
#[serial]
fn test_env_flag_disables_attestation() {
    std::env::set_var("AGENT_REQUIRE_EIGEN_FOR_CREATE_PAY", "false");
    let config = RoutingConfig::from_env();
    std::env::remove_var("AGENT_REQUIRE_EIGEN_FOR_CREATE_PAY");

    let plan = build_agent_routing_plan("create repo-x", &config);
    assert!(!plan.require_attestation);
    // Fallback stays disabled for high risk unless its own flag is set
    assert!(!plan.allow_fallback);
}

#[test]
#[serial]
fn test_env_flag_garbage_falls_back_to_default() {
    std::env::set_var("AGENT_REQUIRE_EIGEN_FOR_CREATE_PAY", "nope");
    std::env::set_var("AGENT_ALLOW_HETZNER_EXEC_FALLBACK", "1");
    let config = RoutingConfig::from_env();
    std::env::remove_var("AGENT_REQUIRE_EIGEN_FOR_CREATE_PAY");
    std::env::remove_var("AGENT_ALLOW_HETZNER_EXEC_FALLBACK");

    let plan = build_agent_routing_plan("pay 100 USDC to repo-x", &config);
    assert!(plan.require_attestation);
    assert!(!plan.allow_fallback);
}

#[test]
#[serial]
fn test_plane_urls_fall_back_to_shared_base() {
    std::env::set_var("AGENT_BASE_URL", "api.gitsplits.xyz");
    std::env::set_var("AGENT_EIGEN_BASE_URL", "localhost:3140");
    let config = RoutingConfig::from_env();
    std::env::remove_var("AGENT_BASE_URL");
    std::env::remove_var("AGENT_EIGEN_BASE_URL");

    let urls = agent_plane_base_urls(&config);
    assert_eq!(urls.hetzner.as_deref(), Some("https://api.gitsplits.xyz"));
    assert_eq!(urls.eigen.as_deref(), Some("http://localhost:3140"));
}
