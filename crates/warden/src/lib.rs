//! Warden - moderation layer for chat bots
//!
//! Warden sits between a chat transport and a bot's own logic. Every inbound
//! message passes a fixed chain of guards before the bot sees it, and every
//! outbound message passes a gate that keeps banned identities from receiving
//! anything but their ban notice.
//!
//! # Features
//!
//! - **Maintenance mode**: lock everyone but the owner out with one command
//! - **Bans**: ban users and whole channels, with an optional reason
//! - **Force-subscribe**: require membership (or a join request) in channels
//! - **Admin commands**: `ban`, `unban`, `banned`, `maintenance`, `delreq`
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use warden::{EventRouter, InMemoryBackend, WardenConfig, build_context};
//!
//! let config = WardenConfig::from_file("warden.toml")?;
//! let context = build_context(&config, Arc::new(InMemoryBackend::new()), transport).await;
//! let router = Arc::new(EventRouter::new(context, Arc::new(MyBot)));
//! router.run(events).await;
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - OpenTelemetry span export to stdout
//!
//! # Architecture
//!
//! - `warden_error` - Error types
//! - `warden_core` - Identities, records, events and payloads
//! - `warden_interface` - Chat transport trait and recording transport
//! - `warden_storage` - Document backend trait and in-memory backend
//! - `warden_cache` - User record cache
//! - `warden_database` - Moderation state store
//! - `warden_security` - Guard chain and outbound gate
//! - `warden_social` - Admin commands and event routing
//!
//! This crate re-exports everything for convenience.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bootstrap;
mod config;
mod observability;
mod simulation;

pub use bootstrap::build_context;
pub use config::{CONFIG_ENV, OWNER_ENV, WardenConfig};
pub use observability::{ObservabilityConfig, init_logging, shutdown_observability};
#[cfg(feature = "observability")]
pub use observability::init_observability_with_config;
pub use simulation::{EchoHandler, parse_events, simulate};

pub use warden_cache::{UserCache, UserCacheConfig, UserCacheConfigBuilder};
pub use warden_core::*;
pub use warden_database::StateStore;
pub use warden_error::*;
pub use warden_interface::*;
pub use warden_security::*;
pub use warden_social::*;
pub use warden_storage::{Document, DocumentBackend, DocumentUpdate, InMemoryBackend};
