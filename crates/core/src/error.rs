//! Error types for docket stores
//!
//! This module defines the error taxonomy shared by every crate in the
//! workspace. We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Absent entries are never errors: read-only lookups report "no such key"
//! with `Option::None`, and only contract violations land here.

use std::io;
use thiserror::Error;

/// Result type alias for docket operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the docket store
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from the underlying file system during persistence
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Key not found in the store
    ///
    /// Raised by operations that require the key to exist (field updates),
    /// never by plain lookups.
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// Key exists but the requested field is absent from its document
    #[error("field {field:?} not found in document for key {key:?}")]
    FieldNotFound {
        /// Store key whose document was inspected
        key: String,
        /// Name of the missing field
        field: String,
    },

    /// Search pattern failed to compile as a regular expression
    #[error("invalid search pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern exactly as supplied by the caller
        pattern: String,
        /// Compile failure reported by the regex engine
        reason: String,
    },

    /// Text input violated the record format during a read
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number where the violation was detected
        line: usize,
        /// What was wrong, naming the record key where it is known
        reason: String,
    },
}
