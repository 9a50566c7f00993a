//! The day view of a calendar as a slot grid.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use cuehall_core::booking::{
    bookings_to_events, window_for_date, DaySchedule, SlotsQuery,
};
use cuehall_core::slots::{SelectionRange, SlotDuration, SlotGrid, SlotWindow};
use cuehall_core::storage::TimeRange;

use super::bookings::require_calendar;
use crate::{handlers::AppError, state::AppState};

/// GET /api/calendars/{id}/slots?date=&slot_minutes=&selected_start=&selected_end=
///
/// Builds the grid from the opening hours in force on the date and the
/// calendar's bookings for that day. A closed day yields an empty grid.
/// Inactive calendars are rendered read-only.
pub async fn get_slots(
    State(state): State<AppState>,
    Path(calendar_id): Path<Uuid>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<DaySchedule>, AppError> {
    let calendar = require_calendar(&state, calendar_id).await?;

    let date = query.date.unwrap_or_else(|| state.clock.today());
    let slot = match query.slot_minutes {
        Some(minutes) => SlotDuration::try_from(minutes)?,
        None => state.default_slot,
    };

    let hours = state.hours_repo.list().await?;
    let exceptions = state.exception_repo.list().await?;
    let window = window_for_date(date, &hours, &exceptions, slot);

    let (day_start, day_end) = state.clock.day_bounds(date)?;
    let bookings = state
        .booking_repo
        .list_bookings(calendar_id, Some(TimeRange::new(day_start, day_end)?))
        .await?;
    let events = bookings_to_events(&bookings, &state.clock);

    let selected = query.selected().map(|(start, end)| SelectionRange {
        start: state.clock.to_wall(start),
        end: state.clock.to_wall(end),
    });

    let open = window.is_some();
    let grid = SlotGrid::new(
        window.unwrap_or_else(|| SlotWindow::new(date, 0, 0, slot)),
        &events,
    )
    .with_selectable(open && calendar.active)
    .render(selected.as_ref());

    tracing::debug!(
        %calendar_id,
        %date,
        open,
        slots = grid.rows.len(),
        occupied = grid.occupied_count(),
        "Rendered slot grid"
    );

    Ok(Json(DaySchedule {
        calendar_id,
        date,
        open,
        grid,
    }))
}
