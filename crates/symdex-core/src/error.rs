//! Error types for symdex.
//!
//! Build and query failures are deterministic functions of their inputs;
//! loader failures carry the path or payload context that caused them.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the symdex library.
#[derive(Debug, Error)]
pub enum SymdexError {
    // Build errors
    #[error("Malformed record at position {position} (container {container:?}): {reason}")]
    MalformedRecord {
        /// Position of the record in the builder input.
        position: usize,
        container: String,
        reason: String,
    },

    // Query errors
    #[error("Invalid query: {reason}")]
    InvalidQuery { reason: String },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("No search index found in {0}")]
    NoSearchIndex(PathBuf),

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("Unrecognized search index format: {message}")]
    Format { message: String },

    #[error("Archive error: {message}")]
    Archive { message: String },

    // Shared index errors
    #[error("Index handle lock poisoned")]
    LockPoisoned,
}

/// Result type alias for symdex operations.
pub type Result<T> = std::result::Result<T, SymdexError>;

impl From<std::io::Error> for SymdexError {
    fn from(err: std::io::Error) -> Self {
        SymdexError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for SymdexError {
    fn from(err: serde_json::Error) -> Self {
        SymdexError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<zip::result::ZipError> for SymdexError {
    fn from(err: zip::result::ZipError) -> Self {
        SymdexError::Archive {
            message: err.to_string(),
        }
    }
}

impl SymdexError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        SymdexError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Create an invalid query error.
    pub fn invalid_query(reason: impl Into<String>) -> Self {
        SymdexError::InvalidQuery {
            reason: reason.into(),
        }
    }

    /// Check if this error was caused by caller-supplied input rather than the
    /// environment (files, locks).
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            SymdexError::MalformedRecord { .. }
                | SymdexError::InvalidQuery { .. }
                | SymdexError::Format { .. }
                | SymdexError::Json { .. }
        )
    }
}
