//! Shared fixtures for routing tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use warden_cache::UserCacheConfig;
use warden_core::{
    ForceSubscribeConfig, Identity, InboundEvent, IncomingMessage, MessageId, OutboundMessage,
    Sender,
};
use warden_database::StateStore;
use warden_interface::RecordingTransport;
use warden_security::OutboundGate;
use warden_social::{EventRouter, MessageHandler, ModerationContext};
use warden_storage::InMemoryBackend;

pub const OWNER: Identity = Identity::new(1000);

/// Echoes every message back and remembers what it saw.
#[derive(Default)]
pub struct EchoHandler {
    pub seen: Mutex<Vec<IncomingMessage>>,
}

#[async_trait]
impl MessageHandler for EchoHandler {
    async fn handle(&self, message: &IncomingMessage, gate: &OutboundGate) {
        self.seen.lock().await.push(message.clone());
        if let Some(text) = &message.text {
            gate.send(message.chat, OutboundMessage::plain(format!("echo: {text}")))
                .await;
        }
    }
}

pub struct Harness {
    pub router: Arc<EventRouter>,
    pub store: Arc<StateStore>,
    pub transport: RecordingTransport,
    pub handler: Arc<EchoHandler>,
}

pub fn harness(force_subscribe: ForceSubscribeConfig) -> Harness {
    let store = Arc::new(StateStore::new(
        Arc::new(InMemoryBackend::new()),
        UserCacheConfig::default(),
    ));
    let transport = RecordingTransport::new("warden_bot");
    let context = Arc::new(ModerationContext::new(
        store.clone(),
        Arc::new(transport.clone()),
        OWNER,
        force_subscribe,
    ));
    let handler = Arc::new(EchoHandler::default());
    let router = Arc::new(EventRouter::new(context, handler.clone()));
    Harness {
        router,
        store,
        transport,
        handler,
    }
}

pub fn message(from: i64, chat: i64, text: &str) -> InboundEvent {
    InboundEvent::Message(IncomingMessage {
        message_id: MessageId(10),
        chat: Identity::new(chat),
        sender: Some(Sender::new(Identity::new(from), format!("user{from}"))),
        text: Some(text.to_string()),
    })
}

/// A command typed by the owner in their private chat.
pub fn owner_says(text: &str) -> InboundEvent {
    message(OWNER.get(), OWNER.get(), text)
}
