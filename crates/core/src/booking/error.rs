use thiserror::Error;
use uuid::Uuid;

/// Errors raised when a resource fails its validation rules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Calendar name cannot be empty")]
    EmptyCalendarName,
    #[error("Calendar name too long (max 100 characters)")]
    CalendarNameTooLong,
    #[error("Booking {0} cannot be empty")]
    MissingBookingField(&'static str),
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    #[error("Booking end must be after its start")]
    InvalidBookingRange,
    #[error("Booking overlaps existing booking {0}")]
    BookingConflict(Uuid),
    #[error("Notice title cannot be empty")]
    EmptyNoticeTitle,
    #[error("Notice content cannot be empty")]
    EmptyNoticeContent,
    #[error("At most {0} notices can be active at the same time")]
    ActiveNoticeLimit(usize),
    #[error("Contact info {0} cannot be empty")]
    MissingContactField(&'static str),
    #[error("Weekday must be an integer 1-7, got {0}")]
    InvalidWeekday(u8),
    #[error("Opening time must be before closing time")]
    InvalidOpeningRange,
    #[error("Opening exception needs opens_at and closes_at unless the day is closed")]
    MissingExceptionHours,
}
