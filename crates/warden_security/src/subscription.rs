//! Force-subscribe guard.

use crate::{Guard, GuardKind, GuardVerdict, subscription_notice};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, error, instrument};
use warden_core::{ForceSubscribeConfig, GuardEvent, Identity};
use warden_database::StateStore;
use warden_interface::{ChatTransport, InviteLinkRequest};
use warden_error::TransportError;

/// Blocks private-chat users who have not joined the configured channels.
///
/// Direct channels need an actual membership. Request channels only need a
/// recorded join request. Channels the bot cannot inspect are skipped, so a
/// misconfigured channel never locks users out.
pub struct SubscriptionGuard {
    store: Arc<StateStore>,
    transport: Arc<dyn ChatTransport>,
    config: ForceSubscribeConfig,
}

impl SubscriptionGuard {
    /// Create the guard.
    pub fn new(
        store: Arc<StateStore>,
        transport: Arc<dyn ChatTransport>,
        config: ForceSubscribeConfig,
    ) -> Self {
        Self {
            store,
            transport,
            config,
        }
    }

    /// Title and invite link for a channel the user is missing.
    async fn invite(
        &self,
        channel: Identity,
        expire_at: Option<DateTime<Utc>>,
        creates_join_request: bool,
    ) -> Option<(String, String)> {
        let result = async {
            let chat = self.transport.get_chat(channel).await?;
            let link = self
                .transport
                .create_invite_link(
                    channel,
                    InviteLinkRequest {
                        expire_at,
                        creates_join_request,
                    },
                )
                .await?;
            Ok::<_, TransportError>((chat.title().clone(), link))
        }
        .await;

        match result {
            Ok(invite) => Some(invite),
            Err(e) => {
                log_skip(channel, &e);
                None
            }
        }
    }
}

fn log_skip(channel: Identity, e: &TransportError) {
    if e.is_admin_required() {
        error!(%channel, "Bot is not an administrator of force-subscribe channel");
    } else {
        debug!(%channel, error = %e, "Skipping force-subscribe channel");
    }
}

#[async_trait]
impl Guard for SubscriptionGuard {
    fn kind(&self) -> GuardKind {
        GuardKind::Subscription
    }

    #[instrument(skip(self, event), fields(chat = %event.chat), level = "debug")]
    async fn evaluate(&self, event: &GuardEvent) -> GuardVerdict {
        if event.is_privileged
            || !self.config.enabled()
            || !self.config.has_channels()
            || !event.chat.is_user()
        {
            return GuardVerdict::Allow;
        }
        let Some(user) = event.sender_id() else {
            return GuardVerdict::Allow;
        };

        let expire_at = self
            .config
            .invite_lifetime()
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime));
        let mut missing = Vec::new();

        for &channel in self.config.channels() {
            match self.transport.get_chat_member(channel, user).await {
                Ok(member) if member.is_member() => continue,
                Ok(_) => {}
                Err(e) if e.is_not_participant() => {}
                Err(e) => {
                    log_skip(channel, &e);
                    continue;
                }
            }
            if let Some(invite) = self.invite(channel, expire_at, false).await {
                missing.push(invite);
            }
        }

        for &channel in self.config.request_channels() {
            if self.store.has_joined_channel(user, channel).await {
                continue;
            }
            if let Some(invite) = self.invite(channel, expire_at, true).await {
                missing.push(invite);
            }
        }

        if missing.is_empty() {
            return GuardVerdict::Allow;
        }

        let bot_username = match self.transport.bot_username().await {
            Ok(username) => Some(username),
            Err(e) => {
                debug!(error = %e, "Bot username unavailable, omitting retry link");
                None
            }
        };
        debug!(missing = missing.len(), "User has not joined required channels");
        GuardVerdict::Block(subscription_notice(
            event.mention(),
            &missing,
            bot_username.as_deref(),
        ))
    }
}
