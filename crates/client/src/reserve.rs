//! Replays a drag gesture on a day's slot grid, the way a pointer would.
//!
//! The CLI has no pointer, so `reserve` presses on the slot holding the
//! requested start, drags to the slot holding the last minute of the requested
//! end and releases. The grid clamps the drag at the first occupied slot, so
//! the committed range can be shorter than the requested one.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use cuehall_core::booking::DaySchedule;
use cuehall_core::slots::{SelectionRange, SlotEvent, SlotGrid};
use serde::Serialize;

use crate::error::{ClientError, Result};

/// Outcome of a replayed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gesture {
    pub requested: SelectionRange,
    pub committed: SelectionRange,
}

impl Gesture {
    /// Whether the drag stopped short of the requested end.
    pub fn is_clamped(&self) -> bool {
        self.committed.end < self.requested.end
    }
}

/// Rebuilds an interactive grid from a schedule fetched from the server.
pub fn grid_for(schedule: &DaySchedule) -> SlotGrid {
    let events: Vec<SlotEvent> = schedule
        .grid
        .events
        .iter()
        .map(|block| SlotEvent::new(block.start, block.end))
        .collect();

    SlotGrid::new(schedule.grid.window, &events).with_selectable(schedule.grid.selectable)
}

/// Wall-clock range on a date; an end of `00:00` is the following midnight.
pub fn requested_range(date: NaiveDate, from: NaiveTime, to: NaiveTime) -> Result<SelectionRange> {
    let start = date.and_time(from);
    let end: NaiveDateTime = if to == NaiveTime::MIN {
        date.and_time(to) + Duration::days(1)
    } else {
        date.and_time(to)
    };

    if end <= start {
        return Err(ClientError::InvalidInput(format!(
            "end {} is not after start {}",
            to.format("%H:%M"),
            from.format("%H:%M")
        )));
    }
    Ok(SelectionRange { start, end })
}

/// Drives pointer-down, pointer-move and pointer-up over the grid.
pub fn drag(grid: &mut SlotGrid, from: NaiveTime, to: NaiveTime) -> Result<Gesture> {
    let window = *grid.window();
    let requested = requested_range(window.date, from, to)?;

    if !grid.is_selectable() {
        return Err(ClientError::InvalidInput(format!(
            "nothing can be booked on {}",
            window.date
        )));
    }

    let anchor = window.index_of(requested.start).ok_or_else(|| {
        ClientError::InvalidInput(format!(
            "{} is outside the opening hours",
            from.format("%H:%M")
        ))
    })?;
    // The slot holding the last minute of the range; past closing means the last slot.
    let target = window
        .index_of(requested.end - Duration::minutes(1))
        .unwrap_or(window.total_slots() - 1);

    grid.pointer_down_at(anchor);
    grid.pointer_move_to(target);
    let committed = grid.pointer_up().ok_or_else(|| {
        ClientError::InvalidInput(format!(
            "the slot at {} is already booked",
            from.format("%H:%M")
        ))
    })?;

    Ok(Gesture {
        requested,
        committed,
    })
}
