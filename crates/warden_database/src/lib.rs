//! Moderation state store for Warden.
//!
//! [`StateStore`] owns every durable record of the moderation layer: bans,
//! join requests, the maintenance flag and user profiles. It sits on top of a
//! [`DocumentBackend`](warden_storage::DocumentBackend) and an in-process
//! [`UserCache`](warden_cache::UserCache).
//!
//! Store methods never return errors. Backend failures are logged and turned
//! into `false`, `None` or empty results so that a flaky database degrades
//! moderation checks instead of taking the bot down.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bans;
mod join_requests;
mod settings;
mod store;
mod users;

pub use store::{
    BANNED_CHANNELS, BANNED_USERS, JOIN_REQUESTS, MAINTENANCE_KEY, SETTINGS, StateStore, USERS,
};
