//! In-process user profile cache.
//!
//! This crate caches the last known [`UserRecord`](warden_core::UserRecord)
//! of every user the bot has talked to, so that profile and session reads do
//! not hit the persistence backend on every message.

#![warn(missing_docs)]

mod cache;

pub use cache::{UserCache, UserCacheConfig, UserCacheConfigBuilder};
