//! Time zone policy for the slot grid.
//!
//! Slot math is done on naive wall-clock values of the hall's time zone.
//! Conversion to and from instants happens only at the boundary, here.
//! Ambiguous local times (clocks turned back) resolve to the earliest instant;
//! local times inside a spring-forward gap are rejected.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use super::error::ClockError;
use super::selection::SelectionRange;

/// Time zone used when none is configured.
pub const DEFAULT_TIME_ZONE: &str = "Europe/Helsinki";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HallClock {
    tz: Tz,
}

impl Default for HallClock {
    fn default() -> Self {
        Self::new(chrono_tz::Europe::Helsinki)
    }
}

impl HallClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Parses an IANA zone name such as `Europe/Helsinki`.
    pub fn from_name(name: &str) -> Result<Self, ClockError> {
        name.parse::<Tz>()
            .map(Self::new)
            .map_err(|_| ClockError::UnknownTimeZone(name.to_string()))
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    /// Today's date on the hall's wall clock.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }

    pub fn to_wall(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.tz).naive_local()
    }

    pub fn to_instant(&self, wall: NaiveDateTime) -> Result<DateTime<Utc>, ClockError> {
        self.tz
            .from_local_datetime(&wall)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .ok_or(ClockError::NonexistentLocalTime(wall))
    }

    /// Converts a committed selection to the instants a booking is stored with.
    pub fn range_to_instants(
        &self,
        range: &SelectionRange,
    ) -> Result<(DateTime<Utc>, DateTime<Utc>), ClockError> {
        Ok((self.to_instant(range.start)?, self.to_instant(range.end)?))
    }

    /// UTC instants for `[date 00:00, date + 1 00:00)` local.
    pub fn day_bounds(&self, date: NaiveDate) -> Result<(DateTime<Utc>, DateTime<Utc>), ClockError> {
        let next = date.succ_opt().unwrap_or(date);
        Ok((self.start_of_day(date)?, self.start_of_day(next)?))
    }

    // A few zones skip midnight itself on DST days; the day then starts an hour later.
    fn start_of_day(&self, date: NaiveDate) -> Result<DateTime<Utc>, ClockError> {
        let midnight = date.and_time(NaiveTime::MIN);
        self.to_instant(midnight)
            .or_else(|_| self.to_instant(midnight + Duration::hours(1)))
    }
}
