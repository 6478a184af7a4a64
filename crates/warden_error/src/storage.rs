//! Persistence backend error types.

/// Kinds of persistence errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Backend could not be reached
    #[display("Storage unavailable: {}", _0)]
    Unavailable(String),
    /// Document key or shape was rejected by the backend
    #[display("Malformed document: {}", _0)]
    Malformed(String),
    /// Field could not be decoded into the expected type
    #[display("Decode error: {}", _0)]
    Decode(String),
    /// Update operation conflicts with the stored document
    #[display("Conflicting update on field '{}'", _0)]
    Conflict(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use warden_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::Unavailable("connection reset".to_string()));
/// assert!(format!("{}", err).contains("connection reset"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for persistence backend operations.
pub type StorageResult<T> = Result<T, StorageError>;
