//! Error types for the audit engine

use std::io;
use thiserror::Error;

/// Main error type for audit operations
#[derive(Debug, Error)]
pub enum AuditError {
    /// IO error while reading the input stream
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Transport-level request error (connect, TLS, timeout)
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status returned before any data was streamed
    #[error("HTTP {0}")]
    HttpStatus(u16),

    /// Report serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

impl From<String> for AuditError {
    fn from(s: String) -> Self {
        AuditError::Custom(s)
    }
}

impl From<&str> for AuditError {
    fn from(s: &str) -> Self {
        AuditError::Custom(s.to_string())
    }
}
