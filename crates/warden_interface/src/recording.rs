//! In-memory chat transport for tests and offline simulation.

use crate::{ChatInfo, ChatMember, ChatTransport, InviteLinkRequest, MemberStatus};
use async_trait::async_trait;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use warden_core::{Identity, MessageId, OutboundMessage};
use warden_error::{TransportError, TransportErrorKind, TransportResult};

/// A message accepted by the [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentMessage {
    /// Assigned message id
    pub message_id: MessageId,
    /// Destination chat
    pub destination: Identity,
    /// Delivered payload
    pub message: OutboundMessage,
}

#[derive(Debug, Default)]
struct TransportState {
    members: HashMap<(Identity, Identity), MemberStatus>,
    titles: HashMap<Identity, String>,
    admin_missing: HashSet<Identity>,
    blocked: HashSet<Identity>,
    fail_deletes: bool,
    sent: Vec<SentMessage>,
    deleted: Vec<(Identity, MessageId)>,
    invites: Vec<(Identity, InviteLinkRequest)>,
    member_lookups: Vec<(Identity, Identity)>,
    next_message_id: i64,
}

/// Chat transport that keeps everything in memory and records every call.
///
/// Membership, chat titles and failure modes are scripted up front; sends,
/// deletions, invite links and member lookups are recorded for inspection.
/// Cloning shares the underlying state.
///
/// # Example
/// ```
/// use warden_core::{Identity, OutboundMessage};
/// use warden_interface::{ChatTransport, RecordingTransport};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let transport = RecordingTransport::new("warden_bot");
/// transport
///     .send(Identity::new(5), OutboundMessage::plain("hi"))
///     .await
///     .unwrap();
/// assert_eq!(transport.sent_to(Identity::new(5)).await.len(), 1);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct RecordingTransport {
    bot_username: String,
    state: Arc<RwLock<TransportState>>,
}

impl RecordingTransport {
    /// Create a transport for a bot with the given username.
    pub fn new(bot_username: impl Into<String>) -> Self {
        Self {
            bot_username: bot_username.into(),
            state: Arc::new(RwLock::new(TransportState {
                next_message_id: 1,
                ..Default::default()
            })),
        }
    }

    /// Make a user a member of a chat.
    pub async fn add_member(&self, chat: Identity, user: Identity, status: MemberStatus) {
        self.state.write().await.members.insert((chat, user), status);
    }

    /// Give a chat a title.
    pub async fn set_title(&self, chat: Identity, title: impl Into<String>) {
        self.state.write().await.titles.insert(chat, title.into());
    }

    /// Simulate the bot lacking admin rights in a chat.
    pub async fn deny_admin(&self, chat: Identity) {
        self.state.write().await.admin_missing.insert(chat);
    }

    /// Simulate a destination that blocked the bot.
    pub async fn block(&self, destination: Identity) {
        self.state.write().await.blocked.insert(destination);
    }

    /// Make every delete fail.
    pub async fn fail_deletes(&self) {
        self.state.write().await.fail_deletes = true;
    }

    /// All delivered messages, in order.
    pub async fn sent(&self) -> Vec<SentMessage> {
        self.state.read().await.sent.clone()
    }

    /// Messages delivered to one destination, in order.
    pub async fn sent_to(&self, destination: Identity) -> Vec<SentMessage> {
        self.state
            .read()
            .await
            .sent
            .iter()
            .filter(|sent| sent.destination == destination)
            .cloned()
            .collect()
    }

    /// Successfully deleted messages.
    pub async fn deleted(&self) -> Vec<(Identity, MessageId)> {
        self.state.read().await.deleted.clone()
    }

    /// Invite links handed out.
    pub async fn invites(&self) -> Vec<(Identity, InviteLinkRequest)> {
        self.state.read().await.invites.clone()
    }

    /// Membership lookups performed, as `(chat, user)`.
    pub async fn member_lookups(&self) -> Vec<(Identity, Identity)> {
        self.state.read().await.member_lookups.clone()
    }

    /// Forget recorded calls, keeping the scripted setup.
    pub async fn clear_recorded(&self) {
        let mut state = self.state.write().await;
        state.sent.clear();
        state.deleted.clear();
        state.invites.clear();
        state.member_lookups.clear();
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn get_chat_member(
        &self,
        chat: Identity,
        user: Identity,
    ) -> TransportResult<ChatMember> {
        let mut state = self.state.write().await;
        state.member_lookups.push((chat, user));
        if state.admin_missing.contains(&chat) {
            return Err(TransportError::new(TransportErrorKind::AdminRequired(
                chat.get(),
            )));
        }
        state
            .members
            .get(&(chat, user))
            .map(|status| ChatMember::new(user, *status))
            .ok_or_else(|| TransportError::new(TransportErrorKind::NotParticipant))
    }

    async fn get_chat(&self, chat: Identity) -> TransportResult<ChatInfo> {
        let state = self.state.read().await;
        let title = state
            .titles
            .get(&chat)
            .cloned()
            .unwrap_or_else(|| format!("Chat {}", chat));
        Ok(ChatInfo::new(chat, title))
    }

    async fn create_invite_link(
        &self,
        chat: Identity,
        request: InviteLinkRequest,
    ) -> TransportResult<String> {
        let mut state = self.state.write().await;
        if state.admin_missing.contains(&chat) {
            return Err(TransportError::new(TransportErrorKind::AdminRequired(
                chat.get(),
            )));
        }
        let mode = if request.creates_join_request {
            "request"
        } else {
            "join"
        };
        let link = format!(
            "https://t.me/+{}-{}-{}",
            mode,
            chat.get().unsigned_abs(),
            state.invites.len() + 1
        );
        state.invites.push((chat, request));
        Ok(link)
    }

    async fn delete_message(&self, chat: Identity, message_id: MessageId) -> TransportResult<()> {
        let mut state = self.state.write().await;
        if state.fail_deletes {
            return Err(TransportError::new(TransportErrorKind::MessageNotFound(
                message_id.0,
            )));
        }
        state.deleted.push((chat, message_id));
        Ok(())
    }

    async fn send(
        &self,
        destination: Identity,
        message: OutboundMessage,
    ) -> TransportResult<MessageId> {
        let mut state = self.state.write().await;
        if state.blocked.contains(&destination) {
            tracing::debug!(%destination, "Recording transport refusing blocked destination");
            return Err(TransportError::new(TransportErrorKind::Blocked(
                destination.get(),
            )));
        }
        let message_id = MessageId(state.next_message_id);
        state.next_message_id += 1;
        state.sent.push(SentMessage {
            message_id,
            destination,
            message,
        });
        Ok(message_id)
    }

    async fn bot_username(&self) -> TransportResult<String> {
        Ok(self.bot_username.clone())
    }
}
