//! State store construction.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use warden_cache::{UserCache, UserCacheConfig};
use warden_core::Identity;
use warden_storage::DocumentBackend;

/// Collection of bans on individual accounts.
pub const BANNED_USERS: &str = "banned_users";
/// Collection of bans on groups and channels.
pub const BANNED_CHANNELS: &str = "banned_channels";
/// Collection of user profiles.
pub const USERS: &str = "users";
/// Collection of singleton settings.
pub const SETTINGS: &str = "settings";
/// Collection of join-request records.
pub const JOIN_REQUESTS: &str = "join_requests";
/// Settings key of the maintenance flag.
pub const MAINTENANCE_KEY: &str = "maintenance";

/// Persistent moderation state.
///
/// Constructed once at startup and shared behind an `Arc`. All mutation goes
/// through its own methods.
pub struct StateStore {
    pub(crate) backend: Arc<dyn DocumentBackend>,
    pub(crate) cache: Mutex<UserCache>,
}

impl StateStore {
    /// Create a store over a backend.
    pub fn new(backend: Arc<dyn DocumentBackend>, cache_config: UserCacheConfig) -> Self {
        Self {
            backend,
            cache: Mutex::new(UserCache::new(cache_config)),
        }
    }

    /// Prepare the backend: install the join-request TTL index if records expire.
    ///
    /// Returns `false` if the backend rejected the index.
    #[tracing::instrument(skip(self))]
    pub async fn initialize(&self, join_request_ttl: Option<Duration>) -> bool {
        let Some(ttl) = join_request_ttl else {
            tracing::debug!("Join requests never expire");
            return true;
        };
        match self
            .backend
            .ensure_ttl_index(JOIN_REQUESTS, "created_at", ttl)
            .await
        {
            Ok(()) => {
                tracing::info!(ttl_secs = ttl.as_secs(), "Join-request TTL installed");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install join-request TTL");
                false
            }
        }
    }

    /// Ban sub-collection an identity belongs to.
    pub fn ban_collection(identity: Identity) -> &'static str {
        if identity.is_user() {
            BANNED_USERS
        } else {
            BANNED_CHANNELS
        }
    }
}

impl std::fmt::Debug for StateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStore").finish_non_exhaustive()
    }
}
