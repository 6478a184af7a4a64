//! Chat transport error types.

/// Specific chat transport failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TransportErrorKind {
    /// The user is not a participant of the requested chat
    #[display("User is not a participant")]
    NotParticipant,
    /// The bot lacks administrator rights in the chat
    #[display("Bot lacks admin rights in chat {}", _0)]
    AdminRequired(i64),
    /// The destination blocked the bot or cannot be messaged
    #[display("Destination {} cannot be messaged", _0)]
    Blocked(i64),
    /// Message could not be found or deleted
    #[display("Message not found: {}", _0)]
    MessageNotFound(i64),
    /// Any other API failure
    #[display("API call failed: {}", _0)]
    Api(String),
}

/// Chat transport error with location tracking.
///
/// # Examples
///
/// ```
/// use warden_error::{TransportError, TransportErrorKind};
///
/// let err = TransportError::new(TransportErrorKind::AdminRequired(-100));
/// assert!(err.is_admin_required());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", kind, line, file)]
pub struct TransportError {
    /// The kind of error that occurred
    pub kind: TransportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TransportError {
    /// Create a new transport error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TransportErrorKind {
        &self.kind
    }

    /// Whether the user was reported as not being a chat participant.
    pub fn is_not_participant(&self) -> bool {
        matches!(self.kind, TransportErrorKind::NotParticipant)
    }

    /// Whether the bot is missing administrator rights.
    pub fn is_admin_required(&self) -> bool {
        matches!(self.kind, TransportErrorKind::AdminRequired(_))
    }
}

/// Result type for chat transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
