//! API request types for the booking store.
//!
//! Shared between the server and the client. Pure data, no I/O.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{Booking, Calendar, Notice, OpeningException, OpeningHours};
use crate::serde::{deserialize_optional_date, deserialize_optional_string, hhmm, optional_hhmm};
use crate::slots::{ClockError, HallClock, SelectionRange};

/// Request payload for creating a new calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCalendarRequest {
    pub name: String,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

impl CreateCalendarRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: true,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn into_calendar(self) -> Calendar {
        Calendar::new(self.name.trim()).with_active(self.active)
    }
}

/// Request payload for updating a calendar. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCalendarRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl UpdateCalendarRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn apply_to(self, calendar: &mut Calendar) {
        if let Some(name) = self.name {
            calendar.name = name.trim().to_string();
        }
        if let Some(active) = self.active {
            calendar.active = active;
        }
    }
}

/// Request payload for booking a calendar. The calendar comes from the URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CreateBookingRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            notes: None,
            start,
            end,
        }
    }

    /// Builds a request for a range committed on the slot grid.
    pub fn for_selection(
        range: &SelectionRange,
        clock: &HallClock,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, ClockError> {
        let (start, end) = clock.range_to_instants(range)?;
        Ok(Self::new(name, email, phone, start, end))
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn into_booking(self, calendar_id: Uuid) -> Booking {
        let booking = Booking::new(
            calendar_id,
            self.name.trim(),
            self.email.trim(),
            self.phone.trim(),
            self.start,
            self.end,
        );
        match self.notes {
            Some(notes) => booking.with_notes(notes),
            None => booking,
        }
    }
}

/// Request payload for creating a notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoticeRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub active: bool,
}

impl CreateNoticeRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            active: false,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn into_notice(self) -> Notice {
        Notice::new(self.title.trim(), self.content.trim()).with_active(self.active)
    }
}

/// Request payload for updating a notice. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNoticeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl UpdateNoticeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn apply_to(self, notice: &mut Notice) {
        if let Some(title) = self.title {
            notice.title = title.trim().to_string();
        }
        if let Some(content) = self.content {
            notice.content = content.trim().to_string();
        }
        if let Some(active) = self.active {
            notice.active = active;
        }
    }
}

/// Body of `PUT /api/opening-hours/{weekday}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertOpeningHoursRequest {
    #[serde(with = "hhmm")]
    pub opens_at: NaiveTime,
    #[serde(with = "hhmm")]
    pub closes_at: NaiveTime,
}

impl UpsertOpeningHoursRequest {
    pub fn new(opens_at: NaiveTime, closes_at: NaiveTime) -> Self {
        Self {
            opens_at,
            closes_at,
        }
    }

    pub fn into_hours(self, weekday: u8) -> OpeningHours {
        OpeningHours::new(weekday, self.opens_at, self.closes_at)
    }
}

/// Body of `PUT /api/opening-hours/exceptions/{date}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpsertOpeningExceptionRequest {
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default, with = "optional_hhmm", skip_serializing_if = "Option::is_none")]
    pub opens_at: Option<NaiveTime>,
    #[serde(default, with = "optional_hhmm", skip_serializing_if = "Option::is_none")]
    pub closes_at: Option<NaiveTime>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub note: Option<String>,
}

impl UpsertOpeningExceptionRequest {
    pub fn closed() -> Self {
        Self {
            is_closed: true,
            ..Self::default()
        }
    }

    pub fn open(opens_at: NaiveTime, closes_at: NaiveTime) -> Self {
        Self {
            is_closed: false,
            opens_at: Some(opens_at),
            closes_at: Some(closes_at),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// A closed day drops any hours that were sent along.
    pub fn into_exception(self, date: NaiveDate) -> OpeningException {
        let (opens_at, closes_at) = if self.is_closed {
            (None, None)
        } else {
            (self.opens_at, self.closes_at)
        };
        OpeningException {
            date,
            is_closed: self.is_closed,
            opens_at,
            closes_at,
            note: self.note,
        }
    }
}

/// Query parameters for `GET /api/opening-hours/exceptions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListExceptionsQuery {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub from: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub to: Option<NaiveDate>,
}

impl ListExceptionsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Inclusive on both ends; a missing bound is open.
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// Query parameters selecting one local day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayQuery {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<NaiveDate>,
}

/// Query parameters for `GET /api/calendars/{id}/slots`.
///
/// `slot_minutes` stays a raw number here so an unsupported value can be
/// reported as a validation error instead of a generic query rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlotsQuery {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_end: Option<DateTime<Utc>>,
}

impl SlotsQuery {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    pub fn with_slot_minutes(mut self, minutes: u32) -> Self {
        self.slot_minutes = Some(minutes);
        self
    }

    pub fn with_selected(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.selected_start = Some(start);
        self.selected_end = Some(end);
        self
    }

    /// The remembered selection, when both ends were given.
    pub fn selected(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((self.selected_start?, self.selected_end?))
    }
}
