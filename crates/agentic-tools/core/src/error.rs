//! Error type for tool calls.

use thiserror::Error;

/// Error type returned by tool operations.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Arguments were malformed or out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Failure inside the tool itself.
    #[error("internal error: {0}")]
    Internal(String),

    /// An upstream service (search API, HTTP) failed.
    #[error("external service error: {0}")]
    External(String),

    /// The named tool or resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

impl ToolError {
    /// Create an invalid input error.
    pub fn invalid_input<S: ToString>(s: S) -> Self {
        Self::InvalidInput(s.to_string())
    }

    /// Create an internal error.
    pub fn internal<S: ToString>(s: S) -> Self {
        Self::Internal(s.to_string())
    }

    /// Create an external service error.
    pub fn external<S: ToString>(s: S) -> Self {
        Self::External(s.to_string())
    }

    /// Create a not found error.
    pub fn not_found<S: ToString>(s: S) -> Self {
        Self::NotFound(s.to_string())
    }
}
