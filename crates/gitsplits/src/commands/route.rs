use gitsplits_core::{
    agent_plane_base_urls, build_agent_routing_plan, format_routing_summary, RoutingConfig,
};

pub fn run(text: &str) -> anyhow::Result<()> {
    let config = RoutingConfig::from_env();
    let plan = build_agent_routing_plan(text, &config);
    let urls = agent_plane_base_urls(&config);

    let output = serde_json::json!({
        "plan": plan,
        "planes": urls,
        "summary": format_routing_summary(&plan),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
