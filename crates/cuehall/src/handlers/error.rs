use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cuehall_core::booking::ValidationError;
use cuehall_core::slots::{ClockError, SlotError};
use cuehall_core::storage::{
    clock_error_to_status_code, repository_error_to_status_code, slot_error_to_status_code,
    validation_error_to_status_code, RangeError, RepositoryError,
};

/// Application error type that wraps `anyhow::Error`.
///
/// Domain errors are downcast to pick the status code; anything else is a 500.
pub struct AppError(pub anyhow::Error);

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        let code = if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(err)
        } else if let Some(err) = self.0.downcast_ref::<ValidationError>() {
            validation_error_to_status_code(err)
        } else if let Some(err) = self.0.downcast_ref::<ClockError>() {
            clock_error_to_status_code(err)
        } else if let Some(err) = self.0.downcast_ref::<SlotError>() {
            slot_error_to_status_code(err)
        } else if self.0.downcast_ref::<RangeError>().is_some() {
            400
        } else if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            rejection.status().as_u16()
        } else if let Some(rejection) = self.0.downcast_ref::<QueryRejection>() {
            rejection.status().as_u16()
        } else {
            500
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Application error");
        } else {
            tracing::warn!(status = %status, message = %self.0, "API error");
        }

        (status, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_status_codes() {
        let not_found = AppError::from(RepositoryError::NotFound {
            entity_type: "Calendar",
            id: "x".to_string(),
        });
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let conflict = AppError::from(ValidationError::BookingConflict(Uuid::nil()));
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

        let bad_slot = AppError::from(SlotError::UnsupportedDuration(45));
        assert_eq!(bad_slot.status_code(), StatusCode::BAD_REQUEST);

        let other = AppError::from(anyhow::anyhow!("boom"));
        assert_eq!(other.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
