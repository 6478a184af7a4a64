//! In-memory document backend.

use crate::{Document, DocumentBackend, DocumentUpdate};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use warden_error::{StorageError, StorageErrorKind, StorageResult};

#[derive(Debug, Clone)]
struct TtlIndex {
    field: String,
    ttl: Duration,
}

#[derive(Debug, Clone)]
struct StoredDocument {
    seq: u64,
    document: Document,
}

#[derive(Debug, Default)]
struct Collection {
    documents: HashMap<String, StoredDocument>,
    next_seq: u64,
    ttl: Option<TtlIndex>,
}

impl Collection {
    /// Remove documents whose TTL has elapsed.
    fn evict_expired(&mut self, now: DateTime<Utc>) -> usize {
        let Some(index) = &self.ttl else {
            return 0;
        };
        let Ok(ttl) = chrono::Duration::from_std(index.ttl) else {
            return 0;
        };
        let before = self.documents.len();
        self.documents.retain(|_, stored| {
            stored
                .document
                .get(&index.field)
                .and_then(|value| value.as_str())
                .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
                .is_none_or(|created| now.signed_duration_since(created) < ttl)
        });
        before - self.documents.len()
    }
}

/// In-memory document backend.
///
/// Stores collections in a HashMap protected by an RwLock for thread-safe
/// access. TTL indexes are enforced lazily: expired documents are evicted
/// whenever their collection is touched. All data is lost when the last clone
/// is dropped.
///
/// Unlike a document database, dropping a collection keeps its TTL index so
/// that records written after a purge still expire.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    collections: Arc<RwLock<HashMap<String, Collection>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate losing the connection: every operation fails while set.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of live documents in a collection.
    pub async fn len(&self, collection: &str) -> usize {
        let mut collections = self.collections.write().await;
        match collections.get_mut(collection) {
            Some(coll) => {
                coll.evict_expired(Utc::now());
                coll.documents.len()
            }
            None => 0,
        }
    }

    fn check(&self, key: Option<&str>) -> StorageResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StorageError::new(StorageErrorKind::Unavailable(
                "in-memory backend marked unavailable".to_string(),
            )));
        }
        if key.is_some_and(|k| k.trim().is_empty()) {
            return Err(StorageError::new(StorageErrorKind::Malformed(
                "empty document key".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl DocumentBackend for InMemoryBackend {
    #[tracing::instrument(skip(self), level = "trace")]
    async fn find_one(&self, collection: &str, key: &str) -> StorageResult<Option<Document>> {
        self.check(Some(key))?;
        let mut collections = self.collections.write().await;
        let Some(coll) = collections.get_mut(collection) else {
            return Ok(None);
        };
        coll.evict_expired(Utc::now());
        Ok(coll.documents.get(key).map(|stored| stored.document.clone()))
    }

    #[tracing::instrument(skip(self), level = "trace")]
    async fn find_all(&self, collection: &str) -> StorageResult<Vec<Document>> {
        self.check(None)?;
        let mut collections = self.collections.write().await;
        let Some(coll) = collections.get_mut(collection) else {
            return Ok(Vec::new());
        };
        coll.evict_expired(Utc::now());
        let mut stored: Vec<&StoredDocument> = coll.documents.values().collect();
        stored.sort_by_key(|s| s.seq);
        Ok(stored.into_iter().map(|s| s.document.clone()).collect())
    }

    #[tracing::instrument(skip(self, update), level = "trace")]
    async fn upsert(
        &self,
        collection: &str,
        key: &str,
        update: DocumentUpdate,
    ) -> StorageResult<Document> {
        self.check(Some(key))?;
        let mut collections = self.collections.write().await;
        let coll = collections.entry(collection.to_string()).or_default();
        coll.evict_expired(Utc::now());

        if let Some(stored) = coll.documents.get_mut(key) {
            let mut document = stored.document.clone();
            update.apply(&mut document, false)?;
            stored.document = document.clone();
            return Ok(document);
        }

        let mut document = Document::new();
        update.apply(&mut document, true)?;
        let seq = coll.next_seq;
        coll.next_seq += 1;
        coll.documents.insert(
            key.to_string(),
            StoredDocument {
                seq,
                document: document.clone(),
            },
        );
        Ok(document)
    }

    #[tracing::instrument(skip(self, update), level = "trace")]
    async fn update_existing(
        &self,
        collection: &str,
        key: &str,
        update: DocumentUpdate,
    ) -> StorageResult<bool> {
        self.check(Some(key))?;
        let mut collections = self.collections.write().await;
        let Some(coll) = collections.get_mut(collection) else {
            return Ok(false);
        };
        coll.evict_expired(Utc::now());
        let Some(stored) = coll.documents.get_mut(key) else {
            return Ok(false);
        };
        let mut document = stored.document.clone();
        update.apply(&mut document, false)?;
        stored.document = document;
        Ok(true)
    }

    #[tracing::instrument(skip(self), level = "trace")]
    async fn delete_one(&self, collection: &str, key: &str) -> StorageResult<bool> {
        self.check(Some(key))?;
        let mut collections = self.collections.write().await;
        let Some(coll) = collections.get_mut(collection) else {
            return Ok(false);
        };
        coll.evict_expired(Utc::now());
        Ok(coll.documents.remove(key).is_some())
    }

    #[tracing::instrument(skip(self))]
    async fn drop_collection(&self, collection: &str) -> StorageResult<()> {
        self.check(None)?;
        let mut collections = self.collections.write().await;
        if let Some(coll) = collections.get_mut(collection) {
            let dropped = coll.documents.len();
            coll.documents.clear();
            tracing::info!(collection, dropped, "Dropped collection");
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn ensure_ttl_index(
        &self,
        collection: &str,
        field: &str,
        ttl: Duration,
    ) -> StorageResult<()> {
        self.check(None)?;
        let mut collections = self.collections.write().await;
        let coll = collections.entry(collection.to_string()).or_default();
        coll.ttl = Some(TtlIndex {
            field: field.to_string(),
            ttl,
        });
        tracing::debug!(ttl_secs = ttl.as_secs(), "TTL index ensured");
        Ok(())
    }
}
