//! Error types shared across the model layer

use thiserror::Error;

/// Errors raised by the model layer
#[derive(Debug, Error)]
pub enum ModelError {
    /// Caller passed an input outside the documented domain
    /// (non-finite number, non-positive price, etc.)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// CSV parse failure while loading a table
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure while loading a table
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ModelError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
