//! Guard chain and outbound gate for the Warden moderation layer.
//!
//! Every inbound message passes through a [`GuardChain`] before bot logic
//! sees it, and every outbound send passes through the [`OutboundGate`].
//!
//! # Architecture
//!
//! The chain runs three guards in a fixed order:
//!
//! 1. **Maintenance** - blocks everyone but the administrator while the
//!    maintenance flag is set
//! 2. **Ban** - blocks banned senders and banned group chats
//! 3. **Subscription** - blocks users who have not joined the required
//!    channels and hands them invite links
//!
//! The first guard that blocks halts the chain. Its notice is delivered
//! through the gate, which swaps any payload addressed to a banned
//! destination for the ban notice.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ban;
mod chain;
mod gate;
mod guard;
mod maintenance;
mod notice;
mod subscription;

pub use ban::BanGuard;
pub use chain::{ChainOutcome, GuardChain};
pub use gate::{OutboundGate, SendOutcome};
pub use guard::{Guard, GuardKind, GuardVerdict};
pub use maintenance::MaintenanceGuard;
pub use notice::{
    BAN_TEXT, Notice, OWNER_BUTTON, RETRY_BUTTON, UNBAN_TEXT, ban_notice, maintenance_notice,
    subscription_notice,
};
pub use subscription::SubscriptionGuard;
