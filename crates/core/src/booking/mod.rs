//! Booking store domain.
//!
//! The resources the hall's back office manages (calendars, bookings, notices,
//! contact info, opening hours and their exceptions), their request payloads
//! and the pure validation rules the server enforces.

mod error;
mod opening;
mod operations;
mod requests;
mod types;

pub use error::ValidationError;
pub use opening::{hours_for_date, validate_opening_exception, validate_opening_hours, window_for_date};
pub use operations::{
    bookings_to_events, check_active_notice_limit, filter_bookings, find_conflict,
    validate_booking, validate_calendar, validate_contact_info, validate_notice, BookingGroup,
    BookingGroups, SortDirection, MAX_ACTIVE_NOTICES, MAX_CALENDAR_NAME_LEN,
};
pub use requests::{
    CreateBookingRequest, CreateCalendarRequest, CreateNoticeRequest, DayQuery,
    ListExceptionsQuery, SlotsQuery, UpdateCalendarRequest, UpdateNoticeRequest,
    UpsertOpeningExceptionRequest, UpsertOpeningHoursRequest,
};
pub use types::{
    Booking, Calendar, ContactInfo, DaySchedule, Notice, OpeningException, OpeningHours,
};
