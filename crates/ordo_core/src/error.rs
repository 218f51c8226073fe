//! Core error types for ORDO.
//!
//! Comparison never fails. These errors only surface at the marshalling
//! edge, where stored values must be exactly 0 or 16 bytes.

use thiserror::Error;

/// Core result type
pub type CoreResult<T> = Result<T, CoreError>;

/// Core error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Stored value is neither empty nor exactly 16 bytes
    #[error("UUIDs must be exactly 16 bytes, got {length}")]
    InvalidUuidLength {
        /// Observed byte length
        length: usize,
    },

    /// Text is not a canonical hyphenated UUID
    #[error("Invalid UUID string '{input}': {reason}")]
    InvalidUuidString {
        /// Rejected input
        input: String,
        /// Why it was rejected
        reason: String,
    },
}

impl CoreError {
    /// Shorthand for a length violation
    #[must_use]
    pub const fn invalid_length(length: usize) -> Self {
        Self::InvalidUuidLength { length }
    }
}
