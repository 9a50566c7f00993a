//! Client error types.

use cuehall_core::resource::EditError;
use cuehall_core::slots::ClockError;
use cuehall_core::storage::RangeError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// 409 from the server: an overlapping booking or the active notice cap.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Rejected locally before anything was sent.
    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Clock(#[from] ClockError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
