//! Guard chain dispatcher.

use crate::{
    BanGuard, Guard, GuardKind, GuardVerdict, MaintenanceGuard, OutboundGate, SubscriptionGuard,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use warden_core::{ForceSubscribeConfig, GuardEvent, Identity};
use warden_database::StateStore;
use warden_interface::ChatTransport;

/// Result of running the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOutcome {
    /// Every guard allowed the event
    Proceed,
    /// A guard blocked the event
    Halted {
        /// The guard that blocked
        guard: GuardKind,
    },
}

/// Ordered guards evaluated against each inbound message.
pub struct GuardChain {
    guards: Vec<Box<dyn Guard>>,
    transport: Arc<dyn ChatTransport>,
    gate: Arc<OutboundGate>,
}

impl GuardChain {
    /// The standard chain: maintenance, ban, subscription.
    pub fn standard(
        store: Arc<StateStore>,
        transport: Arc<dyn ChatTransport>,
        gate: Arc<OutboundGate>,
        owner: Identity,
        force_subscribe: ForceSubscribeConfig,
    ) -> Self {
        let guards: Vec<Box<dyn Guard>> = GuardKind::ORDER
            .iter()
            .map(|kind| -> Box<dyn Guard> {
                match kind {
                    GuardKind::Maintenance => {
                        Box::new(MaintenanceGuard::new(store.clone(), owner))
                    }
                    GuardKind::Ban => Box::new(BanGuard::new(store.clone(), owner)),
                    GuardKind::Subscription => Box::new(SubscriptionGuard::new(
                        store.clone(),
                        transport.clone(),
                        force_subscribe.clone(),
                    )),
                }
            })
            .collect();
        Self::with_guards(guards, transport, gate)
    }

    /// A chain over arbitrary guards, evaluated in the given order.
    pub fn with_guards(
        guards: Vec<Box<dyn Guard>>,
        transport: Arc<dyn ChatTransport>,
        gate: Arc<OutboundGate>,
    ) -> Self {
        Self {
            guards,
            transport,
            gate,
        }
    }

    /// Guards in evaluation order.
    pub fn order(&self) -> Vec<GuardKind> {
        self.guards.iter().map(|guard| guard.kind()).collect()
    }

    /// Evaluate the guards until one blocks.
    ///
    /// On a block the inciting message is deleted if the notice asks for it,
    /// the notice is sent to the chat through the gate, and no further guard
    /// runs.
    #[instrument(skip(self, event), fields(chat = %event.chat, message_id = %event.message_id))]
    pub async fn run(&self, event: &GuardEvent) -> ChainOutcome {
        for guard in &self.guards {
            let notice = match guard.evaluate(event).await {
                GuardVerdict::Allow => continue,
                GuardVerdict::Block(notice) => notice,
            };
            let kind = guard.kind();
            info!(guard = %kind, "Event halted");

            if notice.delete_inciting
                && let Err(e) = self
                    .transport
                    .delete_message(event.chat, event.message_id)
                    .await
            {
                debug!(error = %e, "Could not delete inciting message");
            }
            self.gate.send(event.chat, notice.to_message()).await;
            return ChainOutcome::Halted { guard: kind };
        }
        ChainOutcome::Proceed
    }
}

impl std::fmt::Debug for GuardChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuardChain")
            .field("order", &self.order())
            .finish_non_exhaustive()
    }
}
