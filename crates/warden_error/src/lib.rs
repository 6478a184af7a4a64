//! Error types for the Warden moderation layer.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Most of these errors never reach the caller of the moderation pipeline.
//! Storage errors are turned into sentinel values by the state store and
//! transport errors are logged or skipped at the guard boundary. The types
//! exist so that those boundaries have something precise to log.
//!
//! # Examples
//!
//! ```
//! use warden_error::{TransportError, TransportErrorKind, WardenResult};
//!
//! fn lookup() -> WardenResult<()> {
//!     Err(TransportError::new(TransportErrorKind::NotParticipant))?
//! }
//!
//! assert!(lookup().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod config;
mod error;
mod storage;
mod transport;

pub use command::{CommandError, CommandErrorKind};
pub use config::ConfigError;
pub use error::{WardenError, WardenErrorKind, WardenResult};
pub use storage::{StorageError, StorageErrorKind, StorageResult};
pub use transport::{TransportError, TransportErrorKind, TransportResult};
