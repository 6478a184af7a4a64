//! Chat transport trait.

use crate::{ChatInfo, ChatMember, InviteLinkRequest};
use async_trait::async_trait;
use warden_core::{Identity, MessageId, OutboundMessage};
use warden_error::TransportResult;

/// Remote chat API consumed by the moderation layer.
///
/// Implementations own their timeouts and retries; every failure is reported
/// as a [`TransportError`](warden_error::TransportError) and the moderation
/// layer decides whether to skip, log or swallow it.
///
/// Code outside the outbound gate must not call [`ChatTransport::send`]
/// directly: sends are only checked against the ban list when they go through
/// the gate.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Look up a user's membership in a chat.
    ///
    /// # Errors
    ///
    /// Returns `NotParticipant` if the user never joined, `AdminRequired` if the
    /// bot cannot inspect the chat.
    async fn get_chat_member(&self, chat: Identity, user: Identity)
    -> TransportResult<ChatMember>;

    /// Fetch chat information.
    async fn get_chat(&self, chat: Identity) -> TransportResult<ChatInfo>;

    /// Create an invite link for a chat.
    ///
    /// # Errors
    ///
    /// Returns `AdminRequired` if the bot cannot manage invite links.
    async fn create_invite_link(
        &self,
        chat: Identity,
        request: InviteLinkRequest,
    ) -> TransportResult<String>;

    /// Delete a message.
    async fn delete_message(&self, chat: Identity, message_id: MessageId) -> TransportResult<()>;

    /// Deliver a message of any payload kind.
    async fn send(
        &self,
        destination: Identity,
        message: OutboundMessage,
    ) -> TransportResult<MessageId>;

    /// Username of the bot account, used for deep links.
    async fn bot_username(&self) -> TransportResult<String>;
}
