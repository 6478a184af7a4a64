//! Chat identities.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Signed chat identifier assigned by the chat transport.
///
/// Positive values denote individual accounts. Zero and negative values denote
/// groups and channels. The sign is the only thing that decides which ban
/// sub-collection a record lives in.
///
/// # Examples
///
/// ```
/// use warden_core::Identity;
///
/// let user: Identity = "42".parse().unwrap();
/// assert!(user.is_user());
/// assert!(Identity::new(-1001234).is_group());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
#[display("{}", _0)]
pub struct Identity(i64);

impl Identity {
    /// Wrap a raw identifier.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether this identity belongs to an individual account.
    pub const fn is_user(self) -> bool {
        self.0 > 0
    }

    /// Whether this identity belongs to a group or channel.
    pub const fn is_group(self) -> bool {
        self.0 <= 0
    }

    /// Document key used by the persistence backend.
    pub fn key(self) -> String {
        self.0.to_string()
    }
}

impl FromStr for Identity {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

/// Transport-assigned message identifier, unique within a chat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
#[display("{}", _0)]
pub struct MessageId(pub i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_convention() {
        assert!(Identity::new(1).is_user());
        assert!(!Identity::new(1).is_group());
        assert!(Identity::new(0).is_group());
        assert!(Identity::new(-100).is_group());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let id: Identity = " -1001 ".parse().unwrap();
        assert_eq!(id.get(), -1001);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("abc".parse::<Identity>().is_err());
        assert!("12.5".parse::<Identity>().is_err());
    }
}
