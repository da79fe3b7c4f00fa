//! Error types for gridpack.

use thiserror::Error;

/// Result type alias for gridpack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during layout computation or input validation.
#[derive(Debug, Error)]
pub enum Error {
    /// Statistics requested over an empty sample sequence.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Invalid item dimensions provided.
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Invalid grid arrangement provided.
    #[error("Invalid arrangement: {0}")]
    InvalidArrangement(String),

    /// Invalid gap values provided.
    #[error("Invalid gaps: {0}")]
    InvalidGaps(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
