//! Shared fixtures for guard chain tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use warden_cache::UserCacheConfig;
use warden_core::{ForceSubscribeConfig, GuardEvent, Identity, MessageId, Sender};
use warden_database::StateStore;
use warden_interface::RecordingTransport;
use warden_security::{Guard, GuardKind, GuardVerdict, OutboundGate};
use warden_storage::InMemoryBackend;

pub const OWNER: Identity = Identity::new(1000);

pub struct Fixture {
    pub store: Arc<StateStore>,
    pub transport: RecordingTransport,
    pub gate: Arc<OutboundGate>,
}

pub fn fixture() -> Fixture {
    let store = Arc::new(StateStore::new(
        Arc::new(InMemoryBackend::new()),
        UserCacheConfig::default(),
    ));
    let transport = RecordingTransport::new("warden_bot");
    let gate = Arc::new(OutboundGate::new(
        Arc::new(transport.clone()),
        store.clone(),
        OWNER,
    ));
    Fixture {
        store,
        transport,
        gate,
    }
}

pub fn force_subscribe(channels: &[i64], request_channels: &[i64]) -> ForceSubscribeConfig {
    ForceSubscribeConfig::builder()
        .channels(channels.iter().copied().map(Identity::new).collect())
        .request_channels(request_channels.iter().copied().map(Identity::new).collect())
        .build()
}

/// A private-chat message from `user`.
pub fn private_message(user: i64) -> GuardEvent {
    GuardEvent {
        message_id: MessageId(77),
        chat: Identity::new(user),
        sender: Some(Sender::new(Identity::new(user), "Ada")),
        content: Some("hello".into()),
        is_privileged: Identity::new(user) == OWNER,
    }
}

/// Wraps a guard and counts how often it is evaluated.
pub struct Counted<G> {
    inner: G,
    pub calls: Arc<AtomicUsize>,
}

impl<G: Guard> Counted<G> {
    pub fn new(inner: G) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl<G: Guard> Guard for Counted<G> {
    fn kind(&self) -> GuardKind {
        self.inner.kind()
    }

    async fn evaluate(&self, event: &GuardEvent) -> GuardVerdict {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.evaluate(event).await
    }
}
