//! Records owned by the state store.

use crate::Identity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An active ban on a user or a channel.
///
/// At most one record exists per identity; banning again replaces the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanRecord {
    /// Banned identity
    #[serde(rename = "id")]
    pub identity: Identity,
    /// Reason given by the administrator
    #[serde(default)]
    pub reason: Option<String>,
}

impl BanRecord {
    /// Create a ban record.
    pub fn new(identity: Identity, reason: Option<String>) -> Self {
        Self { identity, reason }
    }
}

/// All active bans, split by sub-collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanList {
    /// Bans on individual accounts
    pub users: Vec<BanRecord>,
    /// Bans on groups and channels
    pub channels: Vec<BanRecord>,
}

impl BanList {
    /// Whether neither sub-list holds a record.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.channels.is_empty()
    }

    /// Total number of bans.
    pub fn len(&self) -> usize {
        self.users.len() + self.channels.len()
    }

    /// Users first, then channels.
    pub fn iter(&self) -> impl Iterator<Item = &BanRecord> {
        self.users.iter().chain(self.channels.iter())
    }
}

/// Last known profile of a user who contacted the bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// User identity
    #[serde(rename = "user_id")]
    pub identity: Identity,
    /// Display name at last contact
    pub name: String,
    /// Opaque session state owned by downstream bot logic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<serde_json::Value>,
}

impl UserRecord {
    /// Create a record without session state.
    pub fn new(identity: Identity, name: impl Into<String>) -> Self {
        Self {
            identity,
            name: name.into(),
            session: None,
        }
    }
}

/// Channels a user has asked to join, for join-request force-subscribe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRequestRecord {
    /// Requesting user
    #[serde(rename = "user_id")]
    pub user: Identity,
    /// Requested channels, without duplicates
    #[serde(default)]
    pub channels: Vec<Identity>,
    /// When the first request was recorded
    pub created_at: DateTime<Utc>,
}

impl JoinRequestRecord {
    /// Whether the user has requested the given channel.
    pub fn contains(&self, channel: Identity) -> bool {
        self.channels.contains(&channel)
    }
}
