pub fn run() -> anyhow::Result<()> {
    println!("gitsplits {}", env!("CARGO_PKG_VERSION"));
    println!("Contribution splits and payout routing for GitHub repositories");
    Ok(())
}
