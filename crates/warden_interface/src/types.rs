//! Transport-level value types.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use warden_core::Identity;

/// Membership state of a user in a chat.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MemberStatus {
    /// Chat creator
    Owner,
    /// Chat administrator
    Administrator,
    /// Regular member
    Member,
    /// Member with restricted permissions
    Restricted,
    /// Former member
    Left,
    /// Removed and banned from the chat
    Banned,
}

/// A user's membership in a chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatMember {
    /// Member identity
    user: Identity,
    /// Membership state
    status: MemberStatus,
}

impl ChatMember {
    /// Create a membership.
    pub fn new(user: Identity, status: MemberStatus) -> Self {
        Self { user, status }
    }

    /// Whether the user currently belongs to the chat.
    pub fn is_member(&self) -> bool {
        !matches!(self.status, MemberStatus::Left | MemberStatus::Banned)
    }
}

/// Public information about a chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatInfo {
    /// Chat identity
    id: Identity,
    /// Chat title
    title: String,
}

impl ChatInfo {
    /// Create chat information.
    pub fn new(id: Identity, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// Parameters for a new invite link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteLinkRequest {
    /// When the link stops working
    pub expire_at: Option<DateTime<Utc>>,
    /// Whether joining through the link sends a join request instead
    pub creates_join_request: bool,
}
