//! Error types for the tour solver.
//!
//! Input validation happens before any computation, so a `SolverError`
//! never comes with a partial result.

use thiserror::Error;

/// Result type alias for solver operations.
pub type SolverResult<T> = Result<T, SolverError>;

/// Unified error type for the solver and its collaborators.
#[derive(Debug, Error)]
pub enum SolverError {
    /// City count, start city or coordinate input out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration contents that parse but make no sense.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading a config file or writing an output file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialisation failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The plotting backend refused to draw.
    #[error("render error: {0}")]
    Render(String),
}

impl SolverError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        SolverError::InvalidArgument(message.into())
    }
}
