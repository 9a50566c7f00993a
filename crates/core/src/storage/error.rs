use thiserror::Error;

use crate::booking::ValidationError;

/// Errors that can occur when constructing a date or time range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Invalid date range: start date must be before or equal to end date")]
    InvalidDateRange,
    #[error("Invalid time range: start must be before or equal to end")]
    InvalidTimeRange,
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
}

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    /// A rule spanning the whole collection failed while the store held its lock.
    #[error("{0}")]
    Rejected(ValidationError),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
