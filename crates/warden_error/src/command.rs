//! Admin command error types.
//!
//! These are user-input errors: they are rendered back to the issuer as a
//! reply and never cause a state mutation.

/// Specific admin command failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CommandErrorKind {
    /// Command name is not recognised
    #[display("Unknown command: {}", _0)]
    UnknownCommand(String),
    /// Required arguments are missing
    #[display("Usage: {}", _0)]
    Usage(&'static str),
    /// Identity argument is not an integer
    #[display("Invalid ID: {}", _0)]
    InvalidIdentity(String),
    /// Maintenance argument is neither `on` nor `off`
    #[display("Invalid status '{}'. Use 'on' or 'off'.", _0)]
    InvalidToggle(String),
}

/// Admin command error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Command Error: {} at line {} in {}", kind, line, file)]
pub struct CommandError {
    /// The kind of error that occurred
    pub kind: CommandErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CommandError {
    /// Create a new command error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CommandErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CommandErrorKind {
        &self.kind
    }
}
