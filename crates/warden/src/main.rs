//! Warden CLI binary.
//!
//! This binary provides command-line access to Warden:
//! - Validate a configuration file
//! - Replay recorded events through the moderation pipeline

use clap::Parser;
use warden::ObservabilityConfig;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, check_config, run_simulation};

    // Pick up WARDEN_CONFIG / WARDEN_OWNER_ID / RUST_LOG from .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut observability = ObservabilityConfig::default().with_json_logs(cli.json_logs);
    if cli.verbose {
        observability = observability.with_log_level("debug");
    }
    #[cfg(feature = "observability")]
    warden::init_observability_with_config(observability)?;
    #[cfg(not(feature = "observability"))]
    warden::init_logging(observability)?;

    match cli.command {
        Commands::CheckConfig { config } => {
            check_config(config)?;
        }

        Commands::Simulate {
            events,
            config,
            bot_username,
        } => {
            run_simulation(&events, config, bot_username).await?;
        }
    }

    warden::shutdown_observability();
    Ok(())
}
