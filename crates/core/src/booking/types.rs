use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde::{deserialize_optional_string, hhmm, optional_hhmm};
use crate::slots::{ranges_overlap, GridView};

/// A bookable table. Inactive calendars are hidden from the public booking flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    pub id: Uuid,
    pub name: String,
    pub active: bool,
}

impl Calendar {
    /// Creates a new active calendar with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            active: true,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Sets a specific ID for this calendar (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// A reservation of one calendar for a half-open span of time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub calendar_id: Uuid,
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

impl Booking {
    pub fn new(
        calendar_id: Uuid,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            calendar_id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            notes: None,
            start,
            end,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets a specific ID for this booking (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when both bookings hold the same calendar for an overlapping span.
    /// Bookings that only touch at a boundary do not overlap.
    pub fn overlaps(&self, other: &Booking) -> bool {
        self.calendar_id == other.calendar_id
            && ranges_overlap(self.start, self.end, other.start, other.end)
    }
}

/// A short announcement shown on the front page while active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub active: bool,
}

impl Notice {
    /// Creates an inactive notice.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            active: false,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Sets a specific ID for this notice (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// The hall's public contact details. There is exactly one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Regular opening hours for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    /// 1 = Monday ... 7 = Sunday.
    pub weekday: u8,
    #[serde(with = "hhmm")]
    pub opens_at: NaiveTime,
    #[serde(with = "hhmm")]
    pub closes_at: NaiveTime,
}

impl OpeningHours {
    pub fn new(weekday: u8, opens_at: NaiveTime, closes_at: NaiveTime) -> Self {
        Self {
            weekday,
            opens_at,
            closes_at,
        }
    }

    /// The weekday number (1 = Monday) of a date.
    pub fn weekday_of(date: NaiveDate) -> u8 {
        date.weekday().number_from_monday() as u8
    }

    /// English weekday name for a weekday number, if valid.
    pub fn weekday_name(weekday: u8) -> Option<&'static str> {
        const NAMES: [&str; 7] = [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ];
        NAMES.get(usize::from(weekday).checked_sub(1)?).copied()
    }
}

/// A one-off override of the regular hours for a single date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningException {
    pub date: NaiveDate,
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

impl OpeningException {
    /// The hall is closed for the whole day.
    pub fn closed(date: NaiveDate) -> Self {
        Self {
            date,
            is_closed: true,
            opens_at: None,
            closes_at: None,
            note: None,
        }
    }

    /// The hall is open with special hours.
    pub fn open(date: NaiveDate, opens_at: NaiveTime, closes_at: NaiveTime) -> Self {
        Self {
            date,
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
}

/// A calendar's slot grid for one day, as served by the slots endpoint.
///
/// `open` is false when the hall is closed that day; the grid then has no rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub calendar_id: Uuid,
    pub date: NaiveDate,
    pub open: bool,
    pub grid: GridView,
}
