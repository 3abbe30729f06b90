//! Error types for GhostDB operations
//!
//! The store itself only ever fails with [`NoTransaction`]; the
//! protocol layer adds [`GhostError::InvalidCommand`]. Both are reported to the
//! user and never end a session. I/O and configuration errors belong to the
//! driver.

use std::path::PathBuf;

/// ROLLBACK or COMMIT issued with no open transaction.
///
/// The only way a store operation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("NO TRANSACTION")]
pub struct NoTransaction;

/// GhostDB error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GhostError {
    /// ROLLBACK or COMMIT issued with no open transaction
    #[error("NO TRANSACTION")]
    NoTransaction,

    /// Unknown verb or wrong number of arguments
    #[error("INVALID COMMAND")]
    InvalidCommand {
        /// The offending input line, trimmed
        line: String,
    },

    /// I/O operation failed in the driver
    #[error("{}", format_io(.path, .kind, .message))]
    Io {
        /// The file path where the error occurred, if any
        path: Option<PathBuf>,
        /// The underlying I/O error kind
        kind: std::io::ErrorKind,
        /// Human-readable description
        message: String,
    },

    /// Configuration rejected by `Config::validate`
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

fn format_io(path: &Option<PathBuf>, kind: &std::io::ErrorKind, message: &str) -> String {
    match path {
        Some(path) => format!("I/O error in {}: {} ({})", path.display(), message, kind),
        None => format!("I/O error: {} ({})", message, kind),
    }
}

impl From<NoTransaction> for GhostError {
    fn from(_: NoTransaction) -> Self {
        GhostError::NoTransaction
    }
}

impl GhostError {
    /// Attach a file path to an I/O error.
    pub fn io_at(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        GhostError::Io {
            path: Some(path.into()),
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Convert std::io::Error to GhostError::Io
impl From<std::io::Error> for GhostError {
    fn from(err: std::io::Error) -> Self {
        GhostError::Io {
            path: None,
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for GhostDB operations
pub type GhostResult<T> = Result<T, GhostError>;
