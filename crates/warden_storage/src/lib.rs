//! Document persistence backends for Warden.
//!
//! The state store keeps its records in named collections of JSON documents.
//! This crate defines the operations it needs from a document database and
//! ships an in-memory implementation.
//!
//! # Features
//!
//! - **Keyed documents**: every document is addressed by a string key
//! - **Upserts**: `$set`, `$setOnInsert` and `$addToSet` style updates
//! - **TTL indexes**: documents expire a fixed time after a timestamp field
//!
//! # Example
//!
//! ```rust
//! use warden_storage::{DocumentBackend, DocumentUpdate, InMemoryBackend};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = InMemoryBackend::new();
//! backend
//!     .upsert("settings", "maintenance", DocumentUpdate::new().set("status", true))
//!     .await?;
//!
//! let doc = backend.find_one("settings", "maintenance").await?;
//! assert_eq!(doc.unwrap()["status"], true);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod memory;
mod update;

pub use backend::{DocumentBackend, decode, timestamp};
pub use memory::InMemoryBackend;
pub use update::{Document, DocumentUpdate};
pub use warden_error::{StorageError, StorageErrorKind, StorageResult};
