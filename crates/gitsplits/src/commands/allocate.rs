use gitsplits_allocation::build_contributors_with_quality;
use gitsplits_core::{ContributorRaw, QualityDecision};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct AllocationInput {
    contributors: Vec<ContributorRaw>,
    #[serde(default)]
    decisions: Vec<QualityDecision>,
}

pub fn run(file: Option<&str>) -> anyhow::Result<()> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let input: AllocationInput = serde_json::from_str(&raw)?;
    let allocation = build_contributors_with_quality(&input.contributors, &input.decisions);

    println!("{}", serde_json::to_string_pretty(&allocation)?);
    Ok(())
}
