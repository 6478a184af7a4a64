//! Trait definitions for the Warden moderation layer.
//!
//! The chat transport is an external collaborator: message delivery, member
//! lookup and invite links live behind [`ChatTransport`]. The crate also ships
//! [`RecordingTransport`], an in-memory transport for tests and offline
//! simulation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod recording;
mod transport;
mod types;

pub use recording::{RecordingTransport, SentMessage};
pub use transport::ChatTransport;
pub use types::{ChatInfo, ChatMember, InviteLinkRequest, MemberStatus};
