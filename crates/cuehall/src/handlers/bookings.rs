//! Booking handlers. Bookings are always created under a calendar.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use cuehall_core::booking::{
    validate_booking, Booking, Calendar, CreateBookingRequest, DayQuery,
};
use cuehall_core::storage::{RepositoryError, TimeRange};

use crate::{handlers::AppError, state::AppState, state::RepositoryFor};

/// Loads a calendar or fails with 404.
pub(crate) async fn require_calendar(state: &AppState, id: Uuid) -> Result<Calendar, AppError> {
    RepositoryFor::<Calendar>::repository(state)
        .get(id)
        .await?
        .ok_or_else(|| {
            RepositoryError::NotFound {
                entity_type: "Calendar",
                id: id.to_string(),
            }
            .into()
        })
}

/// GET /api/calendars/{id}/bookings?date=YYYY-MM-DD
///
/// With a date, only bookings overlapping that day of the hall's clock.
pub async fn list_bookings(
    State(state): State<AppState>,
    Path(calendar_id): Path<Uuid>,
    Query(query): Query<DayQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    require_calendar(&state, calendar_id).await?;

    let range = match query.date {
        Some(date) => {
            let (start, end) = state.clock.day_bounds(date)?;
            Some(TimeRange::new(start, end)?)
        }
        None => None,
    };

    let bookings = state.booking_repo.list_bookings(calendar_id, range).await?;
    Ok(Json(bookings))
}

/// POST /api/calendars/{id}/bookings
///
/// Rejects incomplete contact details and empty ranges with 400 and ranges
/// overlapping another booking of the calendar with 409.
pub async fn create_booking(
    State(state): State<AppState>,
    Path(calendar_id): Path<Uuid>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let Json(payload) = payload?;
    tracing::debug!(%calendar_id, start = %payload.start, end = %payload.end, "Received booking request");

    require_calendar(&state, calendar_id).await?;

    let booking = payload.into_booking(calendar_id);
    validate_booking(&booking)?;
    state.booking_repo.create_booking(&booking).await?;

    tracing::info!(
        booking_id = %booking.id,
        %calendar_id,
        start = %booking.start,
        end = %booking.end,
        "Created booking"
    );
    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /api/bookings/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    match state.booking_repo.get_booking(id).await? {
        Some(booking) => Ok(Json(booking)),
        None => Err(RepositoryError::NotFound {
            entity_type: "Booking",
            id: id.to_string(),
        }
        .into()),
    }
}

/// DELETE /api/bookings/{id}
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.booking_repo.delete_booking(id).await?;

    tracing::info!(booking_id = %id, "Deleted booking");
    Ok(StatusCode::NO_CONTENT)
}
