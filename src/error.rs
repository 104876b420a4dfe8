//! Error types for ds2save
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using SaveError
pub type Result<T> = std::result::Result<T, SaveError>;

/// Unified error type for ds2save operations
#[derive(Debug, Error)]
pub enum SaveError {
    // -------------------------------------------------------------------------
    // Buffer Errors
    // -------------------------------------------------------------------------
    #[error("Access out of range: {width} byte(s) at offset 0x{offset:X} exceed buffer length {len}")]
    OutOfRange {
        offset: usize,
        width: usize,
        len: usize,
    },

    #[error("Unsupported width: {0} (expected 1, 2 or 4)")]
    UnsupportedWidth(usize),

    // -------------------------------------------------------------------------
    // Schema Errors
    // -------------------------------------------------------------------------
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid index {index:?} for field {field}")]
    IndexOutOfGroupRange { field: String, index: Option<usize> },

    #[error("Schema error: {0}")]
    Schema(String),

    // -------------------------------------------------------------------------
    // Format Errors
    // -------------------------------------------------------------------------
    #[error("Invalid save format: {0}")]
    InvalidFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No save is loaded")]
    NoSaveLoaded,

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SaveError {
    /// Whether the error points at a schema or caller bug rather than bad input.
    ///
    /// Structural errors are fatal to the operation and never worth retrying.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            SaveError::OutOfRange { .. }
                | SaveError::UnsupportedWidth(_)
                | SaveError::UnknownField(_)
                | SaveError::IndexOutOfGroupRange { .. }
                | SaveError::Schema(_)
        )
    }
}
