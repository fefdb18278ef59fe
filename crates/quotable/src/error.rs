//! Error types for Quotable
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for the Quotable engine
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Share sheet unavailable")]
    ShareUnavailable,

    #[error("Share error: {0}")]
    Share(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Quotable
pub type Result<T> = std::result::Result<T, QuoteError>;
