use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ValidationError;
use super::types::{Booking, Calendar, ContactInfo, Notice};
use crate::slots::{HallClock, SlotEvent};

/// Maximum number of notices that may be active at once.
pub const MAX_ACTIVE_NOTICES: usize = 3;

/// Maximum calendar name length, in characters.
pub const MAX_CALENDAR_NAME_LEN: usize = 100;

/// Validates a calendar before creation or update.
pub fn validate_calendar(calendar: &Calendar) -> Result<(), ValidationError> {
    let name = calendar.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyCalendarName);
    }
    if name.chars().count() > MAX_CALENDAR_NAME_LEN {
        return Err(ValidationError::CalendarNameTooLong);
    }
    Ok(())
}

/// Validates the contact fields and the time range of a booking.
pub fn validate_booking(booking: &Booking) -> Result<(), ValidationError> {
    let fields = [
        ("name", &booking.name),
        ("email", &booking.email),
        ("phone", &booking.phone),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingBookingField(field));
        }
    }
    if !booking.email.contains('@') {
        return Err(ValidationError::InvalidEmail(booking.email.clone()));
    }
    if booking.end <= booking.start {
        return Err(ValidationError::InvalidBookingRange);
    }
    Ok(())
}

/// Returns the first other booking of the same calendar that overlaps the candidate.
pub fn find_conflict<'a>(bookings: &'a [Booking], candidate: &Booking) -> Option<&'a Booking> {
    bookings
        .iter()
        .find(|existing| existing.id != candidate.id && existing.overlaps(candidate))
}

pub fn validate_notice(notice: &Notice) -> Result<(), ValidationError> {
    if notice.title.trim().is_empty() {
        return Err(ValidationError::EmptyNoticeTitle);
    }
    if notice.content.trim().is_empty() {
        return Err(ValidationError::EmptyNoticeContent);
    }
    Ok(())
}

/// Rejects activating a notice when [`MAX_ACTIVE_NOTICES`] others are already active.
///
/// `notices` may contain the candidate itself (an update); it is not counted twice.
pub fn check_active_notice_limit(
    notices: &[Notice],
    candidate: &Notice,
) -> Result<(), ValidationError> {
    if !candidate.active {
        return Ok(());
    }
    let active_others = notices
        .iter()
        .filter(|notice| notice.id != candidate.id && notice.active)
        .count();
    if active_others >= MAX_ACTIVE_NOTICES {
        return Err(ValidationError::ActiveNoticeLimit(MAX_ACTIVE_NOTICES));
    }
    Ok(())
}

pub fn validate_contact_info(info: &ContactInfo) -> Result<(), ValidationError> {
    let fields = [
        ("address", &info.address),
        ("phone", &info.phone),
        ("email", &info.email),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingContactField(field));
        }
    }
    Ok(())
}

/// Sort order of the admin booking list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Bookings that start on the same (UTC) date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingGroup {
    pub date: NaiveDate,
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingGroups {
    /// Groups in the order of the sorted bookings.
    pub groups: Vec<BookingGroup>,
    pub total_count: usize,
}

/// Builds the admin booking list of one calendar.
///
/// The search is a case-insensitive substring match over name, email, phone
/// and notes; a blank search matches everything.
pub fn filter_bookings(
    bookings: &[Booking],
    calendar_id: Uuid,
    search: &str,
    direction: SortDirection,
) -> BookingGroups {
    let query = search.trim().to_lowercase();

    let mut matching: Vec<&Booking> = bookings
        .iter()
        .filter(|booking| booking.calendar_id == calendar_id)
        .filter(|booking| query.is_empty() || matches_search(booking, &query))
        .collect();

    matching.sort_by(|a, b| match direction {
        SortDirection::Asc => a.start.cmp(&b.start),
        SortDirection::Desc => b.start.cmp(&a.start),
    });

    let total_count = matching.len();
    let mut groups: Vec<BookingGroup> = Vec::new();
    for booking in matching {
        let date = booking.start.date_naive();
        match groups.last_mut() {
            Some(group) if group.date == date => group.bookings.push(booking.clone()),
            _ => groups.push(BookingGroup {
                date,
                bookings: vec![booking.clone()],
            }),
        }
    }

    BookingGroups {
        groups,
        total_count,
    }
}

fn matches_search(booking: &Booking, query: &str) -> bool {
    [
        Some(booking.name.as_str()),
        Some(booking.email.as_str()),
        Some(booking.phone.as_str()),
        booking.notes.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|value| value.to_lowercase().contains(query))
}

/// Converts stored bookings to wall-clock events for the slot grid.
pub fn bookings_to_events(bookings: &[Booking], clock: &HallClock) -> Vec<SlotEvent> {
    bookings
        .iter()
        .map(|booking| {
            SlotEvent::new(clock.to_wall(booking.start), clock.to_wall(booking.end))
                .with_id(booking.id.to_string())
                .with_label(booking.name.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

    fn table() -> Uuid {
        Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap()
    }

    fn other_table() -> Uuid {
        Uuid::parse_str("00000000-0000-0000-0000-000000000002").unwrap()
    }

    fn utc(day: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, h, m, 0).unwrap()
    }

    fn booking(name: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Booking {
        Booking::new(table(), name, "player@example.com", "040 123", start, end)
    }

    #[test]
    fn test_validate_calendar() {
        assert!(validate_calendar(&Calendar::new("Table 1")).is_ok());
        assert_eq!(
            validate_calendar(&Calendar::new("   ")),
            Err(ValidationError::EmptyCalendarName)
        );
        assert_eq!(
            validate_calendar(&Calendar::new("x".repeat(101))),
            Err(ValidationError::CalendarNameTooLong)
        );
        assert!(validate_calendar(&Calendar::new("ä".repeat(100))).is_ok());
    }

    #[test]
    fn test_validate_booking() {
        let valid = booking("Ville", utc(14, 10, 0), utc(14, 11, 0));
        assert!(validate_booking(&valid).is_ok());

        let mut missing_phone = valid.clone();
        missing_phone.phone = " ".to_string();
        assert_eq!(
            validate_booking(&missing_phone),
            Err(ValidationError::MissingBookingField("phone"))
        );

        let mut bad_email = valid.clone();
        bad_email.email = "ville.example.com".to_string();
        assert!(matches!(
            validate_booking(&bad_email),
            Err(ValidationError::InvalidEmail(_))
        ));

        let empty = booking("Ville", utc(14, 10, 0), utc(14, 10, 0));
        assert_eq!(
            validate_booking(&empty),
            Err(ValidationError::InvalidBookingRange)
        );
    }

    #[test]
    fn test_find_conflict() {
        let existing = vec![
            booking("A", utc(14, 10, 0), utc(14, 11, 0)),
            Booking::new(other_table(), "B", "b@x.fi", "1", utc(14, 11, 0), utc(14, 12, 0)),
        ];

        let touching = booking("C", utc(14, 11, 0), utc(14, 12, 0));
        assert!(find_conflict(&existing, &touching).is_none());

        let overlapping = booking("D", utc(14, 10, 30), utc(14, 11, 30));
        assert_eq!(
            find_conflict(&existing, &overlapping).map(|b| b.name.as_str()),
            Some("A")
        );
    }

    #[test]
    fn test_find_conflict_ignores_itself() {
        let existing = vec![booking("A", utc(14, 10, 0), utc(14, 11, 0))];
        assert!(find_conflict(&existing, &existing[0]).is_none());
    }

    #[test]
    fn test_validate_notice() {
        assert!(validate_notice(&Notice::new("Open", "We are open")).is_ok());
        assert_eq!(
            validate_notice(&Notice::new("", "We are open")),
            Err(ValidationError::EmptyNoticeTitle)
        );
        assert_eq!(
            validate_notice(&Notice::new("Open", " ")),
            Err(ValidationError::EmptyNoticeContent)
        );
    }

    #[test]
    fn test_active_notice_limit() {
        let notices: Vec<Notice> = (0..3)
            .map(|i| Notice::new(format!("N{i}"), "text").with_active(true))
            .collect();

        let inactive = Notice::new("N3", "text");
        assert!(check_active_notice_limit(&notices, &inactive).is_ok());

        let fourth = inactive.with_active(true);
        assert_eq!(
            check_active_notice_limit(&notices, &fourth),
            Err(ValidationError::ActiveNoticeLimit(3))
        );

        // Re-saving one of the three active notices is fine.
        assert!(check_active_notice_limit(&notices, &notices[1]).is_ok());
    }

    #[test]
    fn test_validate_contact_info() {
        let mut info = ContactInfo {
            address: "Hämeenkatu 1, Tampere".to_string(),
            phone: "03 123 4567".to_string(),
            email: "info@example.com".to_string(),
        };
        assert!(validate_contact_info(&info).is_ok());

        info.address.clear();
        assert_eq!(
            validate_contact_info(&info),
            Err(ValidationError::MissingContactField("address"))
        );
    }

    #[test]
    fn test_filter_bookings_search_and_calendar() {
        let bookings = vec![
            booking("Ville", utc(14, 10, 0), utc(14, 11, 0)),
            booking("Anna", utc(14, 12, 0), utc(14, 13, 0)).with_notes("Snooker practice"),
            Booking::new(other_table(), "Ville", "v@x.fi", "1", utc(14, 10, 0), utc(14, 11, 0)),
        ];

        let all = filter_bookings(&bookings, table(), "  ", SortDirection::Asc);
        assert_eq!(all.total_count, 2);

        let ville = filter_bookings(&bookings, table(), "VILLE", SortDirection::Asc);
        assert_eq!(ville.total_count, 1);

        let notes = filter_bookings(&bookings, table(), "snooker", SortDirection::Asc);
        assert_eq!(notes.groups[0].bookings[0].name, "Anna");
    }

    #[test]
    fn test_filter_bookings_sort_and_group() {
        let bookings = vec![
            booking("late", utc(15, 18, 0), utc(15, 19, 0)),
            booking("early", utc(14, 10, 0), utc(14, 11, 0)),
            booking("noon", utc(14, 12, 0), utc(14, 13, 0)),
        ];

        let asc = filter_bookings(&bookings, table(), "", SortDirection::Asc);
        assert_eq!(asc.groups.len(), 2);
        assert_eq!(asc.groups[0].date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        let names: Vec<_> = asc.groups[0].bookings.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["early", "noon"]);

        let desc = filter_bookings(&bookings, table(), "", SortDirection::Desc);
        assert_eq!(desc.groups[0].date, NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
        assert_eq!(desc.groups[1].bookings[0].name, "noon");
        assert_eq!(desc.total_count, 3);
    }

    #[test]
    fn test_bookings_to_events_uses_hall_time() {
        let clock = HallClock::default();
        // 10:00 UTC is 12:00 in Helsinki (UTC+2) in March before DST
        let events = bookings_to_events(&[booking("Ville", utc(14, 10, 0), utc(14, 11, 0))], &clock);

        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].start,
            NaiveDateTime::parse_from_str("2025-03-14 12:00", "%Y-%m-%d %H:%M").unwrap()
        );
        assert_eq!(events[0].label.as_deref(), Some("Ville"));
    }
}
