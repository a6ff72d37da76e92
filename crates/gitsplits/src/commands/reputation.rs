use gitsplits_reputation::{evaluate_payout_eligibility, ReputationConfig};

pub fn run(username: &str, wallet: Option<&str>) -> anyhow::Result<()> {
    let config = ReputationConfig::from_env();
    let eligibility = evaluate_payout_eligibility(username, wallet, &config);

    println!("{}", serde_json::to_string_pretty(&eligibility)?);
    Ok(())
}
