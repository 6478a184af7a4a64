//! `simulate` command.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use warden::{ConfigError, RecordingTransport, WardenConfig, WardenResult, parse_events, simulate};

/// Replay an event file and print each outbound send as a JSON line.
pub async fn run_simulation(
    events: &Path,
    config: Option<PathBuf>,
    bot_username: String,
) -> WardenResult<()> {
    let config = WardenConfig::load(config)?;
    let file = File::open(events).map_err(|e| {
        ConfigError::new(format!("Failed to open {}: {}", events.display(), e))
    })?;
    let events = parse_events(BufReader::new(file))?;
    tracing::info!(count = events.len(), "Replaying events");

    let sent = simulate(&config, events, RecordingTransport::new(bot_username)).await;
    for message in &sent {
        let line = serde_json::to_string(message)
            .map_err(|e| ConfigError::new(format!("Failed to encode send: {}", e)))?;
        println!("{}", line);
    }
    tracing::info!(sends = sent.len(), "Simulation finished");
    Ok(())
}
