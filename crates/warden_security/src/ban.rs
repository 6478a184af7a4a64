//! Ban guard.

use crate::{Guard, GuardKind, GuardVerdict, ban_notice};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};
use warden_core::{GuardEvent, Identity};
use warden_database::StateStore;

/// Blocks banned senders, and messages in banned group chats.
///
/// The sender is checked first. A group chat is only checked when the sender
/// is not banned, so a banned user sees their own ban reason.
#[derive(Debug, Clone)]
pub struct BanGuard {
    store: Arc<StateStore>,
    owner: Identity,
}

impl BanGuard {
    /// Create the guard.
    pub fn new(store: Arc<StateStore>, owner: Identity) -> Self {
        Self { store, owner }
    }
}

#[async_trait]
impl Guard for BanGuard {
    fn kind(&self) -> GuardKind {
        GuardKind::Ban
    }

    #[instrument(skip(self, event), fields(chat = %event.chat), level = "debug")]
    async fn evaluate(&self, event: &GuardEvent) -> GuardVerdict {
        if event.is_privileged {
            return GuardVerdict::Allow;
        }

        let mut record = None;
        if let Some(sender) = event.sender_id() {
            record = self.store.is_banned(sender).await;
        }
        if record.is_none() && event.chat.is_group() {
            record = self.store.is_banned(event.chat).await;
        }

        match record {
            Some(record) => {
                debug!(banned = %record.identity, "Banned identity, blocking");
                GuardVerdict::Block(ban_notice(record.reason.as_deref(), self.owner))
            }
            None => GuardVerdict::Allow,
        }
    }
}
