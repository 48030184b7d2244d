//! Error types for sqlgen

use thiserror::Error;

/// Result type alias for builder operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors raised while assembling a statement.
///
/// Every error surfaces synchronously at the offending chain call; the
/// library performs no I/O and never retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Dialect name outside the supported set
    #[error("Invalid dialect: {0}")]
    InvalidDialect(String),

    /// Argument that cannot become part of the statement
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation not available under the active dialect
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl BuildError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an unsupported operation error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedOperation(message.into())
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is an unsupported operation error
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedOperation(_))
    }
}
