//! Error types for the portfolio search service

use std::io;

use thiserror::Error;

/// Result type alias for portfolio search
pub type Result<T> = std::result::Result<T, Error>;

/// Portfolio search errors
#[derive(Error, Debug)]
pub enum Error {
    /// Query failed validation (page or page size out of range)
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Corpus provider could not produce records
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a query validation error
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery(message.into())
    }

    /// Whether the caller, not the service, is at fault
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidQuery(_))
    }
}
