//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Warden - moderation layer for chat bots
#[derive(Parser, Debug)]
#[command(name = "warden")]
#[command(about = "Moderation layer for chat bots: bans, maintenance mode and force-subscribe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and validate the configuration, then print a summary
    CheckConfig {
        /// Path to the configuration TOML file
        #[arg(long, env = "WARDEN_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Feed JSON-lines events through the pipeline and print every send
    Simulate {
        /// Path to the JSON-lines event file
        events: PathBuf,

        /// Path to the configuration TOML file
        #[arg(long, env = "WARDEN_CONFIG")]
        config: Option<PathBuf>,

        /// Username the simulated bot reports
        #[arg(long, default_value = "warden_bot")]
        bot_username: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_simulate() {
        let cli = Cli::try_parse_from([
            "warden",
            "--json-logs",
            "simulate",
            "events.jsonl",
            "--config",
            "warden.toml",
        ])
        .unwrap();
        assert!(cli.json_logs);
        match cli.command {
            Commands::Simulate {
                events,
                config,
                bot_username,
            } => {
                assert_eq!(events, PathBuf::from("events.jsonl"));
                assert_eq!(config, Some(PathBuf::from("warden.toml")));
                assert_eq!(bot_username, "warden_bot");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
