use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use super::RangeError;
use crate::slots::ranges_overlap;

/// A date range with inclusive start and end dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidDateRange);
        }
        Ok(Self { start, end })
    }

    /// The whole calendar month.
    pub fn month(year: i32, month: u32) -> Result<Self, RangeError> {
        let invalid = || RangeError::InvalidMonth { year, month };
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let end = next.and_then(|d| d.pred_opt()).ok_or_else(invalid)?;
        Ok(Self { start, end })
    }

    /// The Monday-to-Sunday week containing `date`.
    pub fn week(date: NaiveDate) -> Self {
        let start = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A half-open span of instants `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Creates a new time range, validating that start <= end.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidTimeRange);
        }
        Ok(Self { start, end })
    }

    /// Whether `[start, end)` overlaps this range. Touching ranges do not.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        ranges_overlap(self.start, self.end, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_invalid_date_range_returns_error() {
        assert_eq!(
            DateRange::new(date(2024, 1, 31), date(2024, 1, 1)),
            Err(RangeError::InvalidDateRange)
        );
        assert!(DateRange::new(date(2024, 6, 15), date(2024, 6, 15)).is_ok());
    }

    #[test]
    fn test_month_february_leap_year() {
        let range = DateRange::month(2024, 2).unwrap();
        assert_eq!(range.start, date(2024, 2, 1));
        assert_eq!(range.end, date(2024, 2, 29));
    }

    #[test]
    fn test_month_december() {
        let range = DateRange::month(2025, 12).unwrap();
        assert_eq!(range.end, date(2025, 12, 31));
        assert!(range.contains(date(2025, 12, 24)));
        assert!(!range.contains(date(2026, 1, 1)));
    }

    #[test]
    fn test_month_invalid() {
        assert_eq!(
            DateRange::month(2025, 13),
            Err(RangeError::InvalidMonth {
                year: 2025,
                month: 13
            })
        );
    }

    #[test]
    fn test_week_crossing_month_boundary() {
        // 2024-01-31 is a Wednesday
        let range = DateRange::week(date(2024, 1, 31));
        assert_eq!(range.start, date(2024, 1, 29));
        assert_eq!(range.end, date(2024, 2, 4));
        assert_eq!(range.start.weekday(), Weekday::Mon);
        assert_eq!(range.end.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_time_range_overlap_is_half_open() {
        let at = |h| Utc.with_ymd_and_hms(2025, 3, 14, h, 0, 0).unwrap();
        let range = TimeRange::new(at(10), at(12)).unwrap();

        assert!(range.overlaps(at(11), at(13)));
        assert!(!range.overlaps(at(12), at(13)));
        assert!(!range.overlaps(at(8), at(10)));
        assert_eq!(
            TimeRange::new(at(12), at(10)),
            Err(RangeError::InvalidTimeRange)
        );
    }
}
