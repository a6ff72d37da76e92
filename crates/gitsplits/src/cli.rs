use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gitsplits")]
#[command(version)]
#[command(about = "Contribution splits and payout routing for GitHub repositories")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the routing plan for a command text
    Route {
        /// Command text, e.g. "@gitsplits create near/near-sdk-rs"
        text: String,
    },

    /// Infer an intent from free-form text
    Assist {
        /// Free-form request text
        text: String,
    },

    /// Compute a quality-adjusted allocation (stdin/file JSON)
    Allocate {
        /// Path to input JSON (reads stdin if omitted)
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Reputation profile and payout eligibility for a username
    Reputation {
        /// GitHub username
        username: String,

        /// Linked wallet address, if any
        #[arg(long)]
        wallet: Option<String>,
    },

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["gitsplits", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_route() {
        let cli = Cli::try_parse_from(["gitsplits", "route", "@gitsplits analyze a/b"]);
        assert!(matches!(cli.unwrap().command, Commands::Route { .. }));
    }

    #[test]
    fn test_cli_parse_reputation_with_wallet() {
        let cli = Cli::try_parse_from([
            "gitsplits",
            "reputation",
            "alice",
            "--wallet",
            "alice.near",
        ])
        .unwrap();
        match cli.command {
            Commands::Reputation { username, wallet } => {
                assert_eq!(username, "alice");
                assert_eq!(wallet.as_deref(), Some("alice.near"));
            }
            _ => panic!("expected reputation command"),
        }
    }
}
