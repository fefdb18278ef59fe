//! Error types for Quotable app services
//!
//! Application-level errors that wrap engine errors and add app-specific variants.

use quotable::error::QuoteError;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] QuoteError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Engine(QuoteError::Io(e))
    }
}

/// Result type alias for Quotable app services
pub type Result<T> = std::result::Result<T, AppError>;
