//! Offline pipeline simulation.

use crate::{WardenConfig, build_context};
use async_trait::async_trait;
use std::io::BufRead;
use std::sync::Arc;
use warden_core::{InboundEvent, IncomingMessage, OutboundMessage};
use warden_error::{ConfigError, WardenResult};
use warden_interface::{RecordingTransport, SentMessage};
use warden_security::OutboundGate;
use warden_social::{EventRouter, MessageHandler};
use warden_storage::InMemoryBackend;

/// Stand-in bot logic that echoes text messages back.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoHandler;

#[async_trait]
impl MessageHandler for EchoHandler {
    async fn handle(&self, message: &IncomingMessage, gate: &OutboundGate) {
        if let Some(text) = &message.text {
            gate.send(message.chat, OutboundMessage::plain(text.clone()))
                .await;
        }
    }
}

/// Parse JSON-lines inbound events, skipping blank lines and `#` comments.
///
/// # Errors
///
/// Returns a [`ConfigError`] naming the first unreadable or invalid line.
pub fn parse_events(reader: impl BufRead) -> WardenResult<Vec<InboundEvent>> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ConfigError::new(format!("Failed to read events: {}", e)))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(line).map_err(|e| {
            ConfigError::new(format!("Invalid event on line {}: {}", index + 1, e))
        })?;
        events.push(event);
    }
    Ok(events)
}

/// Run events through the full pipeline over in-memory state.
///
/// Events are dispatched one after another so the output is reproducible.
/// Returns every message the transport accepted, in order.
#[tracing::instrument(skip_all, fields(events = events.len()))]
pub async fn simulate(
    config: &WardenConfig,
    events: Vec<InboundEvent>,
    transport: RecordingTransport,
) -> Vec<SentMessage> {
    let context = build_context(
        config,
        Arc::new(InMemoryBackend::new()),
        Arc::new(transport.clone()),
    )
    .await;
    let router = EventRouter::new(context, Arc::new(EchoHandler));

    for event in events {
        let outcome = router.dispatch(event).await;
        tracing::debug!(?outcome, "Simulated event");
    }
    transport.sent().await
}
