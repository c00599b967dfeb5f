//! Error types for the cipherplay engine
//!
//! All fallible operations return `Result<T, Error>`.
//! Error types provide context for diagnosis.

/// Cipherplay engine error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Shift value that is not a finite, integer-valued number
    #[error("invalid shift: {0}")]
    InvalidShift(String),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;
