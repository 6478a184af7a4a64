//! User record cache implementation.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use warden_core::{Identity, UserRecord};

/// Configuration for the user cache.
#[derive(Debug, Clone, Serialize, Deserialize, Getters, derive_setters::Setters, derive_builder::Builder)]
#[setters(prefix = "with_")]
pub struct UserCacheConfig {
    /// Maximum cache size (number of users)
    #[serde(default = "default_max_entries")]
    #[builder(default = "default_max_entries()")]
    max_entries: usize,

    /// Whether caching is enabled
    #[serde(default = "default_enabled")]
    #[builder(default = "default_enabled()")]
    enabled: bool,
}

fn default_max_entries() -> usize {
    10_000
}

fn default_enabled() -> bool {
    true
}

impl Default for UserCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            enabled: default_enabled(),
        }
    }
}

/// Cache of user records keyed by identity.
///
/// The cache is filled on read misses and updated after successful writes by
/// the state store. Nothing else invalidates it, so a record changed behind
/// the store's back stays stale until it is evicted. When full, the least
/// recently used user is evicted.
///
/// # Example
///
/// ```
/// use warden_cache::{UserCache, UserCacheConfig};
/// use warden_core::{Identity, UserRecord};
///
/// let mut cache = UserCache::new(UserCacheConfig::default());
/// cache.insert(UserRecord::new(Identity::new(7), "Ada"));
///
/// assert_eq!(cache.get(Identity::new(7)).unwrap().name, "Ada");
/// assert!(cache.get(Identity::new(8)).is_none());
/// ```
#[derive(Debug)]
pub struct UserCache {
    config: UserCacheConfig,
    entries: HashMap<Identity, UserRecord>,
    access_order: Vec<Identity>,
}

impl UserCache {
    /// Create a new user cache with configuration.
    pub fn new(config: UserCacheConfig) -> Self {
        tracing::debug!(
            max_entries = config.max_entries,
            enabled = config.enabled,
            "Creating new UserCache"
        );
        Self {
            config,
            entries: HashMap::new(),
            access_order: Vec::new(),
        }
    }

    /// Insert or replace a user's record.
    #[tracing::instrument(skip(self, record), fields(user = %record.identity, cache_size = self.entries.len()))]
    pub fn insert(&mut self, record: UserRecord) {
        if !self.config.enabled || self.config.max_entries == 0 {
            tracing::debug!("Cache disabled or zero-sized, skipping insert");
            return;
        }

        let key = record.identity;
        if self.entries.len() >= self.config.max_entries && !self.entries.contains_key(&key) {
            self.evict_lru();
        }

        self.touch(key);
        self.entries.insert(key, record);
    }

    /// Get a cached record.
    ///
    /// Returns None if the user is not cached or the cache is disabled.
    pub fn get(&mut self, user: Identity) -> Option<&UserRecord> {
        if !self.config.enabled || !self.entries.contains_key(&user) {
            return None;
        }
        self.touch(user);
        tracing::trace!(%user, "Cache hit");
        self.entries.get(&user)
    }

    /// Replace the session of a cached user.
    ///
    /// Returns `false` if the user is not cached; the cache is not populated.
    pub fn update_session(&mut self, user: Identity, session: serde_json::Value) -> bool {
        match self.entries.get_mut(&user) {
            Some(record) => {
                record.session = Some(session);
                true
            }
            None => false,
        }
    }

    /// Drop a user from the cache.
    pub fn remove(&mut self, user: Identity) -> Option<UserRecord> {
        if let Some(pos) = self.access_order.iter().position(|k| *k == user) {
            self.access_order.remove(pos);
        }
        self.entries.remove(&user)
    }

    /// Clear all cache entries.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        self.access_order.clear();
        tracing::info!(cleared = count, "Cleared user cache");
    }

    /// Get number of cached users.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cache configuration.
    pub fn config(&self) -> &UserCacheConfig {
        &self.config
    }

    fn touch(&mut self, user: Identity) {
        if let Some(pos) = self.access_order.iter().position(|k| *k == user) {
            self.access_order.remove(pos);
        }
        self.access_order.push(user);
    }

    fn evict_lru(&mut self) {
        if let Some(user) = self.access_order.first().copied() {
            tracing::debug!(%user, "Evicting LRU user");
            self.entries.remove(&user);
            self.access_order.remove(0);
        }
    }
}

impl Default for UserCache {
    fn default() -> Self {
        Self::new(UserCacheConfig::default())
    }
}
