//! User records with read-through/write-through caching.
//!
//! Every operation that fills or clears a cache entry holds the cache lock
//! across its backend round trip, so a read-through cannot cache a document
//! that a concurrent write has already replaced.

use crate::{StateStore, USERS};
use serde_json::Value;
use tracing::{debug, instrument, warn};
use warden_core::{Identity, UserRecord};
use warden_storage::{DocumentUpdate, decode};

impl StateStore {
    /// Create or refresh a user's record, keeping any session.
    ///
    /// Returns the stored record, or `None` if the backend failed.
    #[instrument(skip(self, name), fields(user = %user))]
    pub async fn add_or_update_user(&self, user: Identity, name: &str) -> Option<UserRecord> {
        let update = DocumentUpdate::new()
            .set("user_id", user.get())
            .set("name", name);
        let mut cache = self.cache.lock().await;
        let document = match self.backend.upsert(USERS, &user.key(), update).await {
            Ok(document) => document,
            Err(e) => {
                warn!(error = %e, "Failed to save user");
                return None;
            }
        };
        let record = self.decode_user(document)?;
        cache.insert(record.clone());
        Some(record)
    }

    /// A user's record, served from cache when possible.
    #[instrument(skip(self), fields(user = %user), level = "debug")]
    pub async fn get_user(&self, user: Identity) -> Option<UserRecord> {
        let mut cache = self.cache.lock().await;
        if let Some(record) = cache.get(user) {
            return Some(record.clone());
        }
        let document = match self.backend.find_one(USERS, &user.key()).await {
            Ok(document) => document?,
            Err(e) => {
                warn!(error = %e, "Failed to load user");
                return None;
            }
        };
        let record = self.decode_user(document)?;
        debug!("Populating cache from store");
        cache.insert(record.clone());
        Some(record)
    }

    /// Replace a known user's session.
    ///
    /// Returns `false` if the user has no record or the backend failed.
    #[instrument(skip(self, session), fields(user = %user))]
    pub async fn set_session(&self, user: Identity, session: Value) -> bool {
        let update = DocumentUpdate::new().set("session", session.clone());
        let mut cache = self.cache.lock().await;
        match self.backend.update_existing(USERS, &user.key(), update).await {
            Ok(true) => {
                cache.update_session(user, session);
                true
            }
            Ok(false) => {
                debug!("No user record to attach session to");
                false
            }
            Err(e) => {
                warn!(error = %e, "Failed to save session");
                false
            }
        }
    }

    /// A user's session, if any.
    pub async fn get_session(&self, user: Identity) -> Option<Value> {
        self.get_user(user).await.and_then(|record| record.session)
    }

    /// Delete a user's record and cache entry.
    ///
    /// Returns `true` if a record existed.
    #[instrument(skip(self), fields(user = %user))]
    pub async fn delete_user(&self, user: Identity) -> bool {
        let mut cache = self.cache.lock().await;
        cache.remove(user);
        match self.backend.delete_one(USERS, &user.key()).await {
            Ok(existed) => existed,
            Err(e) => {
                warn!(error = %e, "Failed to delete user");
                false
            }
        }
    }

    /// Every stored user record.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Vec<UserRecord> {
        match self.backend.find_all(USERS).await {
            Ok(documents) => documents
                .into_iter()
                .filter_map(|document| self.decode_user(document))
                .collect(),
            Err(e) => {
                warn!(error = %e, "Failed to list users");
                Vec::new()
            }
        }
    }

    fn decode_user(&self, document: warden_storage::Document) -> Option<UserRecord> {
        match decode::<UserRecord>(document) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(error = %e, "Malformed user record");
                None
            }
        }
    }
}
