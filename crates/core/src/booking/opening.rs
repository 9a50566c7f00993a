//! Opening hours: validation and the day window the slot grid is built from.
//!
//! A closing time of `00:00` means midnight at the end of the day.

use chrono::{NaiveDate, NaiveTime, Timelike};

use super::error::ValidationError;
use super::types::{OpeningException, OpeningHours};
use crate::slots::{SlotDuration, SlotWindow};

/// Whether `closes_at` comes after `opens_at` on the same day.
fn closes_after(opens_at: NaiveTime, closes_at: NaiveTime) -> bool {
    closes_at == NaiveTime::MIN || opens_at < closes_at
}

pub fn validate_opening_hours(hours: &OpeningHours) -> Result<(), ValidationError> {
    if !(1..=7).contains(&hours.weekday) {
        return Err(ValidationError::InvalidWeekday(hours.weekday));
    }
    if !closes_after(hours.opens_at, hours.closes_at) {
        return Err(ValidationError::InvalidOpeningRange);
    }
    Ok(())
}

pub fn validate_opening_exception(exception: &OpeningException) -> Result<(), ValidationError> {
    if exception.is_closed {
        return Ok(());
    }
    match (exception.opens_at, exception.closes_at) {
        (Some(opens_at), Some(closes_at)) if closes_after(opens_at, closes_at) => Ok(()),
        (Some(_), Some(_)) => Err(ValidationError::InvalidOpeningRange),
        _ => Err(ValidationError::MissingExceptionHours),
    }
}

/// The opening times in force on `date`, or `None` when the hall is closed.
///
/// An exception for the date wins over the weekly hours.
pub fn hours_for_date(
    date: NaiveDate,
    hours: &[OpeningHours],
    exceptions: &[OpeningException],
) -> Option<(NaiveTime, NaiveTime)> {
    match exceptions.iter().find(|exception| exception.date == date) {
        Some(exception) if exception.is_closed => None,
        Some(OpeningException {
            opens_at: Some(opens_at),
            closes_at: Some(closes_at),
            ..
        }) => Some((*opens_at, *closes_at)),
        _ => {
            let weekday = OpeningHours::weekday_of(date);
            hours
                .iter()
                .find(|h| h.weekday == weekday)
                .map(|h| (h.opens_at, h.closes_at))
        }
    }
}

/// Builds the slot window for `date` from the hall's opening hours.
///
/// The window starts at the opening hour (rounded down) and ends at the
/// closing hour (rounded up). Closed or unconfigured days yield `None`.
pub fn window_for_date(
    date: NaiveDate,
    hours: &[OpeningHours],
    exceptions: &[OpeningException],
    slot: SlotDuration,
) -> Option<SlotWindow> {
    let (opens_at, closes_at) = hours_for_date(date, hours, exceptions)?;

    let start_hour = opens_at.hour();
    let end_hour = if closes_at == NaiveTime::MIN {
        24
    } else if closes_at.minute() > 0 || closes_at.second() > 0 {
        closes_at.hour() + 1
    } else {
        closes_at.hour()
    };

    let window = SlotWindow::new(date, start_hour, end_hour, slot);
    (!window.is_empty()).then_some(window)
}
