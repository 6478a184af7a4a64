//! Admin commands and event routing for the Warden moderation layer.
//!
//! [`EventRouter`] is the entry point for inbound events. It records contacts
//! and join requests, hands administrator commands to [`AdminCommands`], runs
//! everything else through the guard chain, and passes surviving messages to
//! the bot's own [`MessageHandler`].
//!
//! # Example
//!
//! ```rust,ignore
//! let context = Arc::new(ModerationContext::new(store, transport, owner, force_subscribe));
//! let router = Arc::new(EventRouter::new(context, Arc::new(MyBot)));
//!
//! let (tx, rx) = tokio::sync::mpsc::channel(64);
//! tokio::spawn(router.run(rx));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod admin;
mod command;
mod context;
mod router;

pub use admin::{AdminCommands, AdminReply, BANNED_LIST_FILE, INLINE_LIST_LIMIT};
pub use command::{AdminCommand, CommandResult};
pub use context::ModerationContext;
pub use router::{EventRouter, MessageHandler, RouteOutcome};
