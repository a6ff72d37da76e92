mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Route { text } => commands::route::run(&text),
        Commands::Assist { text } => commands::assist::run(&text),
        Commands::Allocate { file } => commands::allocate::run(file.as_deref()),
        Commands::Reputation { username, wallet } => {
            commands::reputation::run(&username, wallet.as_deref())
        }
        Commands::Version => commands::version::run(),
    }
}
