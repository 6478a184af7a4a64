//! Outbound gate.

use crate::ban_notice;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use warden_core::{Identity, MessageId, OutboundMessage};
use warden_database::StateStore;
use warden_interface::ChatTransport;

/// What happened to a send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The payload was delivered
    Delivered(MessageId),
    /// The destination is banned, or delivery failed
    Suppressed,
}

impl SendOutcome {
    /// Id of the delivered message, if any.
    pub fn message_id(&self) -> Option<MessageId> {
        match self {
            Self::Delivered(id) => Some(*id),
            Self::Suppressed => None,
        }
    }
}

/// The single path to the chat transport for outbound messages.
///
/// A payload addressed to a banned destination is replaced by the ban notice,
/// whatever its kind. Delivery failures are logged and never propagate.
pub struct OutboundGate {
    transport: Arc<dyn ChatTransport>,
    store: Arc<StateStore>,
    owner: Identity,
}

impl OutboundGate {
    /// Create the gate.
    pub fn new(transport: Arc<dyn ChatTransport>, store: Arc<StateStore>, owner: Identity) -> Self {
        Self {
            transport,
            store,
            owner,
        }
    }

    /// Send a message, unless the destination is banned.
    #[instrument(skip(self, message), fields(destination = %destination, kind = %message.kind()))]
    pub async fn send(&self, destination: Identity, message: OutboundMessage) -> SendOutcome {
        if let Some(record) = self.store.is_banned(destination).await {
            debug!("Destination banned, substituting ban notice");
            let notice = ban_notice(record.reason.as_deref(), self.owner);
            if let Err(e) = self.transport.send(destination, notice.to_message()).await {
                debug!(error = %e, "Ban notice not delivered");
            }
            return SendOutcome::Suppressed;
        }

        match self.transport.send(destination, message).await {
            Ok(id) => SendOutcome::Delivered(id),
            Err(e) => {
                warn!(error = %e, "Outbound send failed");
                SendOutcome::Suppressed
            }
        }
    }
}

impl std::fmt::Debug for OutboundGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutboundGate")
            .field("owner", &self.owner)
            .finish_non_exhaustive()
    }
}
