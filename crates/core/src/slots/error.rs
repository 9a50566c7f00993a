use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors raised when slot grid configuration is parsed from untrusted input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Unsupported slot duration: {0} minutes (expected 15, 30 or 60)")]
    UnsupportedDuration(u32),
}

/// Errors raised when converting between hall wall-clock time and instants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),
    #[error("Local time {0} does not exist in the hall time zone")]
    NonexistentLocalTime(NaiveDateTime),
}
