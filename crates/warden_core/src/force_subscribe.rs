//! Force-subscribe settings.

use crate::Identity;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Largest accepted `invite_expire_minutes`: one year.
pub const MAX_INVITE_EXPIRE_MINUTES: u64 = 366 * 24 * 60;

/// Which channels a user must join before using the bot.
///
/// Direct channels are checked through a membership lookup. Request channels
/// are satisfied once the user has sent a join request, which the moderation
/// layer records as it arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, TypedBuilder)]
pub struct ForceSubscribeConfig {
    /// Whether the subscription guard runs at all.
    #[builder(default = true)]
    #[serde(default = "default_enabled")]
    enabled: bool,

    /// Channels the user must be a member of.
    #[builder(default)]
    #[serde(default)]
    channels: Vec<Identity>,

    /// Channels the user must have requested to join.
    #[builder(default)]
    #[serde(default)]
    request_channels: Vec<Identity>,

    /// Invite link lifetime in minutes; also the join-request record TTL.
    /// Zero disables both.
    #[builder(default = 5)]
    #[serde(default = "default_invite_expire_minutes")]
    invite_expire_minutes: u64,
}

fn default_enabled() -> bool {
    true
}

fn default_invite_expire_minutes() -> u64 {
    5
}

impl Default for ForceSubscribeConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            channels: Vec::new(),
            request_channels: Vec::new(),
            invite_expire_minutes: default_invite_expire_minutes(),
        }
    }
}

impl ForceSubscribeConfig {
    /// Whether any channel is configured.
    pub fn has_channels(&self) -> bool {
        !self.channels.is_empty() || !self.request_channels.is_empty()
    }

    /// Whether the chat is a configured join-request channel.
    pub fn is_request_channel(&self, chat: Identity) -> bool {
        self.request_channels.contains(&chat)
    }

    /// Whether `invite_expire_minutes` is within [`MAX_INVITE_EXPIRE_MINUTES`].
    pub fn expiry_in_range(&self) -> bool {
        self.invite_expire_minutes <= MAX_INVITE_EXPIRE_MINUTES
    }

    /// Invite link lifetime, if links should expire.
    ///
    /// Values too large to represent are treated as no expiry.
    pub fn invite_lifetime(&self) -> Option<chrono::Duration> {
        if self.invite_expire_minutes == 0 {
            return None;
        }
        i64::try_from(self.invite_expire_minutes)
            .ok()
            .and_then(chrono::Duration::try_minutes)
    }

    /// Join-request record TTL, if records should expire.
    pub fn join_request_ttl(&self) -> Option<std::time::Duration> {
        if self.invite_expire_minutes == 0 {
            return None;
        }
        self.invite_expire_minutes
            .checked_mul(60)
            .map(std::time::Duration::from_secs)
    }
}
