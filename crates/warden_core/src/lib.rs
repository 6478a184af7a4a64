//! Core data types for the Warden moderation layer.
//!
//! This crate provides the identities, persisted records, inbound events and
//! outbound payloads shared by every other Warden crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod event;
mod force_subscribe;
mod identity;
mod keyboard;
mod outbound;
mod record;

pub use event::{GuardEvent, InboundEvent, IncomingMessage, JoinRequest, Sender};
pub use force_subscribe::{ForceSubscribeConfig, MAX_INVITE_EXPIRE_MINUTES};
pub use identity::{Identity, MessageId};
pub use keyboard::{ButtonTarget, InlineButton, InlineKeyboard};
pub use outbound::{Attachment, OutboundMessage, PayloadKind};
pub use record::{BanList, BanRecord, JoinRequestRecord, UserRecord};
