//! The guard abstraction.

use crate::Notice;
use async_trait::async_trait;
use serde::Serialize;
use warden_core::GuardEvent;

/// Identifies a guard in the chain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GuardKind {
    /// Maintenance mode
    Maintenance,
    /// Ban check
    Ban,
    /// Force-subscribe check
    Subscription,
}

impl GuardKind {
    /// Evaluation order of the standard chain.
    pub const ORDER: [GuardKind; 3] = [
        GuardKind::Maintenance,
        GuardKind::Ban,
        GuardKind::Subscription,
    ];
}

/// Result of evaluating one guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardVerdict {
    /// Let the event continue down the chain
    Allow,
    /// Stop processing and answer with a notice
    Block(Notice),
}

impl GuardVerdict {
    /// Whether the verdict halts the chain.
    pub fn is_block(&self) -> bool {
        matches!(self, Self::Block(_))
    }
}

/// A predicate over inbound messages that may halt processing.
///
/// Guards only decide. Deleting the inciting message and delivering the
/// notice is done by the [`GuardChain`](crate::GuardChain).
#[async_trait]
pub trait Guard: Send + Sync {
    /// Which guard this is.
    fn kind(&self) -> GuardKind;

    /// Evaluate the event.
    async fn evaluate(&self, event: &GuardEvent) -> GuardVerdict;
}
