//! Backend trait definition.

use crate::{Document, DocumentUpdate};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use warden_error::{StorageError, StorageErrorKind, StorageResult};

/// Trait for pluggable document persistence backends.
///
/// Every operation on a single document is atomic. There are no
/// cross-document transactions.
#[async_trait::async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Fetch one document by key.
    async fn find_one(&self, collection: &str, key: &str) -> StorageResult<Option<Document>>;

    /// Fetch every document of a collection, in insertion order.
    async fn find_all(&self, collection: &str) -> StorageResult<Vec<Document>>;

    /// Apply an update, inserting the document if it does not exist.
    ///
    /// # Returns
    ///
    /// The document as stored after the update.
    async fn upsert(
        &self,
        collection: &str,
        key: &str,
        update: DocumentUpdate,
    ) -> StorageResult<Document>;

    /// Apply an update only if the document already exists.
    ///
    /// # Returns
    ///
    /// `true` if a document was updated.
    async fn update_existing(
        &self,
        collection: &str,
        key: &str,
        update: DocumentUpdate,
    ) -> StorageResult<bool>;

    /// Delete one document.
    ///
    /// # Returns
    ///
    /// `true` if a document was deleted.
    async fn delete_one(&self, collection: &str, key: &str) -> StorageResult<bool>;

    /// Remove every document of a collection.
    async fn drop_collection(&self, collection: &str) -> StorageResult<()>;

    /// Expire documents `ttl` after the timestamp stored in `field`.
    ///
    /// Documents whose field is missing or not a timestamp never expire.
    async fn ensure_ttl_index(
        &self,
        collection: &str,
        field: &str,
        ttl: Duration,
    ) -> StorageResult<()>;
}

/// Decode a stored document into a record type.
pub fn decode<T: DeserializeOwned>(document: Document) -> StorageResult<T> {
    serde_json::from_value(Value::Object(document))
        .map_err(|e| StorageError::new(StorageErrorKind::Decode(e.to_string())))
}

/// Encode a timestamp the way TTL indexes read it.
pub fn timestamp(at: DateTime<Utc>) -> Value {
    Value::String(at.to_rfc3339())
}
