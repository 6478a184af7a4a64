//! Ban records.

use crate::{BANNED_CHANNELS, BANNED_USERS, StateStore};
use tracing::{debug, info, instrument, warn};
use warden_core::{BanList, BanRecord, Identity};
use warden_storage::{DocumentUpdate, decode};

impl StateStore {
    /// Ban an identity, replacing any previous reason.
    ///
    /// Returns `false` if the backend failed.
    #[instrument(skip(self, reason), fields(target = %target, collection = Self::ban_collection(target)))]
    pub async fn ban(&self, target: Identity, reason: Option<String>) -> bool {
        let update = DocumentUpdate::new()
            .set("id", target.get())
            .set("reason", reason);
        match self
            .backend
            .upsert(Self::ban_collection(target), &target.key(), update)
            .await
        {
            Ok(_) => {
                info!("Identity banned");
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to ban identity");
                false
            }
        }
    }

    /// Lift a ban.
    ///
    /// Returns `true` only if a ban existed and was removed.
    #[instrument(skip(self), fields(target = %target))]
    pub async fn unban(&self, target: Identity) -> bool {
        match self
            .backend
            .delete_one(Self::ban_collection(target), &target.key())
            .await
        {
            Ok(existed) => {
                debug!(existed, "Unban processed");
                existed
            }
            Err(e) => {
                warn!(error = %e, "Failed to unban identity");
                false
            }
        }
    }

    /// Active ban on an identity, if any.
    ///
    /// Backend failures read as "not banned".
    #[instrument(skip(self), fields(target = %target), level = "debug")]
    pub async fn is_banned(&self, target: Identity) -> Option<BanRecord> {
        let document = match self
            .backend
            .find_one(Self::ban_collection(target), &target.key())
            .await
        {
            Ok(document) => document?,
            Err(e) => {
                warn!(error = %e, "Ban lookup failed, treating as not banned");
                return None;
            }
        };
        match decode::<BanRecord>(document) {
            Ok(record) => Some(record),
            Err(e) => {
                // A document exists under this key, so the identity is banned
                // even if the reason is unreadable.
                warn!(error = %e, "Malformed ban record");
                Some(BanRecord::new(target, None))
            }
        }
    }

    /// Every active ban, users first.
    #[instrument(skip(self))]
    pub async fn list_banned(&self) -> BanList {
        BanList {
            users: self.list_collection(BANNED_USERS).await,
            channels: self.list_collection(BANNED_CHANNELS).await,
        }
    }

    async fn list_collection(&self, collection: &str) -> Vec<BanRecord> {
        let documents = match self.backend.find_all(collection).await {
            Ok(documents) => documents,
            Err(e) => {
                warn!(collection, error = %e, "Failed to list bans");
                return Vec::new();
            }
        };
        documents
            .into_iter()
            .filter_map(|document| match decode::<BanRecord>(document) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(collection, error = %e, "Skipping malformed ban record");
                    None
                }
            })
            .collect()
    }
}
