//! Inbound events delivered by the chat transport.

use crate::{Identity, MessageId};
use serde::{Deserialize, Serialize};

/// The account that sent a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    /// Sender identity
    pub id: Identity,
    /// Display name, refreshed into the user record on every contact
    #[serde(default)]
    pub display_name: String,
}

impl Sender {
    /// Create a sender.
    pub fn new(id: Identity, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

/// A message received in some chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// Message id within the chat
    pub message_id: MessageId,
    /// Chat the message was posted in
    pub chat: Identity,
    /// Sender, absent for anonymous and channel posts
    #[serde(default)]
    pub sender: Option<Sender>,
    /// Text content, absent for media-only messages
    #[serde(default)]
    pub text: Option<String>,
}

/// A user asking to join a chat that requires approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRequest {
    /// Requesting user
    pub user: Sender,
    /// Chat the request targets
    pub chat: Identity,
}

/// Events the moderation layer subscribes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundEvent {
    /// New message
    Message(IncomingMessage),
    /// Chat join request
    JoinRequest(JoinRequest),
}

/// The view of a message that guards evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardEvent {
    /// Message to delete when a guard blocks
    pub message_id: MessageId,
    /// Chat the message was posted in
    pub chat: Identity,
    /// Sender, if any
    pub sender: Option<Sender>,
    /// Message text
    pub content: Option<String>,
    /// Whether the sender is the configured administrator
    pub is_privileged: bool,
}

impl GuardEvent {
    /// Build the guard view of a message, flagging the administrator.
    pub fn from_message(message: &IncomingMessage, owner: Identity) -> Self {
        let is_privileged = message
            .sender
            .as_ref()
            .is_some_and(|sender| sender.id == owner);
        Self {
            message_id: message.message_id,
            chat: message.chat,
            sender: message.sender.clone(),
            content: message.text.clone(),
            is_privileged,
        }
    }

    /// Sender identity, if any.
    pub fn sender_id(&self) -> Option<Identity> {
        self.sender.as_ref().map(|sender| sender.id)
    }

    /// Name used when addressing the sender in notices.
    pub fn mention(&self) -> &str {
        match &self.sender {
            Some(sender) if !sender.display_name.is_empty() => &sender.display_name,
            _ => "User",
        }
    }
}
