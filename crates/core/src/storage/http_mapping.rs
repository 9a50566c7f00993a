//! Pure functions mapping domain errors to HTTP status codes.

use super::RepositoryError;
use crate::booking::ValidationError;
use crate::slots::{ClockError, SlotError};

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404
/// - `AlreadyExists` -> 409
/// - `Rejected` -> whatever the wrapped [`ValidationError`] maps to
/// - `ConnectionFailed` -> 503
/// - `QueryFailed`, `Serialization` -> 500
/// - `InvalidData` -> 400
///
/// # Examples
///
/// ```
/// use cuehall_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Calendar",
///     id: "abc-123".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::Rejected(validation) => validation_error_to_status_code(validation),
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::Serialization(_) => 500,
        RepositoryError::InvalidData(_) => 400,
    }
}

/// Maps a [`ValidationError`] to an HTTP status code.
///
/// Rules that depend on other stored items (overlapping bookings, the active
/// notice cap) are conflicts (409); everything else is a bad request (400).
pub fn validation_error_to_status_code(error: &ValidationError) -> u16 {
    match error {
        ValidationError::BookingConflict(_) | ValidationError::ActiveNoticeLimit(_) => 409,
        _ => 400,
    }
}

/// Time zone and slot errors only come from bad input.
pub fn clock_error_to_status_code(_error: &ClockError) -> u16 {
    400
}

pub fn slot_error_to_status_code(_error: &SlotError) -> u16 {
    400
}
