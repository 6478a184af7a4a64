//! Shared moderation services.

use crate::AdminCommands;
use derive_getters::Getters;
use std::sync::Arc;
use warden_core::{ForceSubscribeConfig, Identity};
use warden_database::StateStore;
use warden_interface::ChatTransport;
use warden_security::{GuardChain, OutboundGate};

/// Everything the moderation layer needs, built once at startup.
///
/// Handlers receive the context by `Arc`; state changes only go through the
/// store's own methods.
#[derive(Getters)]
pub struct ModerationContext {
    owner: Identity,
    force_subscribe: ForceSubscribeConfig,
    store: Arc<StateStore>,
    transport: Arc<dyn ChatTransport>,
    gate: Arc<OutboundGate>,
    chain: GuardChain,
    commands: AdminCommands,
}

impl ModerationContext {
    /// Wire the gate, the standard guard chain and the admin commands.
    pub fn new(
        store: Arc<StateStore>,
        transport: Arc<dyn ChatTransport>,
        owner: Identity,
        force_subscribe: ForceSubscribeConfig,
    ) -> Self {
        let gate = Arc::new(OutboundGate::new(transport.clone(), store.clone(), owner));
        let chain = GuardChain::standard(
            store.clone(),
            transport.clone(),
            gate.clone(),
            owner,
            force_subscribe.clone(),
        );
        let commands = AdminCommands::new(store.clone(), gate.clone(), owner);
        Self {
            owner,
            force_subscribe,
            store,
            transport,
            gate,
            chain,
            commands,
        }
    }
}

impl std::fmt::Debug for ModerationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModerationContext")
            .field("owner", &self.owner)
            .field("force_subscribe", &self.force_subscribe)
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}
