//! Pretty output formatting.

use cuehall_core::booking::{
    Booking, BookingGroups, Calendar, ContactInfo, DaySchedule, Notice, OpeningException,
    OpeningHours,
};
use cuehall_core::slots::HallClock;

use crate::client::health::Liveness;
use crate::reserve::Gesture;

const RULE_WIDTH: usize = 40;

fn section<T>(title: &str, items: &[T], empty: &str, format: impl Fn(&T) -> String) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    let mut output = format!("{} ({})\n", title, items.len());
    output.push_str(&"-".repeat(RULE_WIDTH));
    for item in items {
        output.push_str(&format!("\n{}", format(item)));
        output.push('\n');
    }
    output
}

/// Format a calendar for display.
pub fn format_calendar(calendar: &Calendar) -> String {
    let state = if calendar.active { "active" } else { "inactive" };
    format!("{} ({})\n  ID: {}", calendar.name, state, calendar.id)
}

pub fn format_calendars(calendars: &[Calendar]) -> String {
    section("CALENDARS", calendars, "No calendars found.", format_calendar)
}

pub fn format_notice(notice: &Notice) -> String {
    let marker = if notice.active { " [active]" } else { "" };
    format!(
        "{}{}\n  ID: {}\n  {}",
        notice.title, marker, notice.id, notice.content
    )
}

pub fn format_notices(notices: &[Notice]) -> String {
    section("NOTICES", notices, "No notices found.", format_notice)
}

/// Format a booking with its times on the hall's wall clock.
pub fn format_booking(booking: &Booking, clock: &HallClock) -> String {
    let start = clock.to_wall(booking.start);
    let end = clock.to_wall(booking.end);
    let mut output = format!(
        "{} {}-{} {}\n  ID: {}\n  Calendar: {}\n  Contact: {}, {}",
        start.format("%Y-%m-%d"),
        start.format("%H:%M"),
        end.format("%H:%M"),
        booking.name,
        booking.id,
        booking.calendar_id,
        booking.email,
        booking.phone
    );
    if let Some(notes) = &booking.notes {
        output.push_str(&format!("\n  Notes: {}", notes));
    }
    output
}

/// Format the admin booking list, one heading per date.
pub fn format_booking_groups(groups: &BookingGroups, clock: &HallClock) -> String {
    if groups.total_count == 0 {
        return "No bookings found.".to_string();
    }
    let mut output = format!("BOOKINGS ({})", groups.total_count);
    for group in &groups.groups {
        output.push_str(&format!("\n\n{}\n", group.date.format("%A %Y-%m-%d")));
        output.push_str(&"-".repeat(RULE_WIDTH));
        for booking in &group.bookings {
            output.push_str(&format!("\n{}", format_booking(booking, clock)));
        }
    }
    output
}

/// Draw a day's grid as text: one line per slot, `#` for booked, `*` for
/// the remembered selection and `~` for a live drag.
pub fn format_schedule(schedule: &DaySchedule) -> String {
    let grid = &schedule.grid;
    if !schedule.open {
        return format!("Closed on {}.", schedule.date);
    }

    let mut output = format!(
        "{} {}{}",
        schedule.date.format("%A %Y-%m-%d"),
        schedule.calendar_id,
        if grid.selectable { "" } else { " (read only)" }
    );

    let selected = grid.selected.map(|block| block.rows);
    for row in &grid.rows {
        let marker = if row.occupied {
            '#'
        } else if row.in_drag {
            '~'
        } else if selected.is_some_and(|rows| (rows.start..rows.end).contains(&row.index)) {
            '*'
        } else {
            ' '
        };
        output.push_str(&format!("\n  {} [{}]", row.start.format("%H:%M"), marker));

        let label = grid
            .events
            .iter()
            .find(|event| event.rows.start == row.index)
            .and_then(|event| event.label.as_deref());
        if let Some(label) = label {
            output.push_str(&format!(" {}", label));
        }
    }

    let free = grid.rows.len() - grid.occupied_count();
    output.push_str(&format!("\n{} of {} slots free", free, grid.rows.len()));
    output
}

pub fn format_gesture(gesture: &Gesture) -> String {
    let committed = &gesture.committed;
    let mut output = format!(
        "Selected {} {}-{}",
        committed.start.format("%Y-%m-%d"),
        committed.start.format("%H:%M"),
        committed.end.format("%H:%M")
    );
    if gesture.is_clamped() {
        output.push_str(&format!(
            " (stopped before a booking; asked for {})",
            gesture.requested.end.format("%H:%M")
        ));
    }
    output
}

pub fn format_contact_info(info: &ContactInfo) -> String {
    format!(
        "Address: {}\nPhone: {}\nEmail: {}",
        info.address, info.phone, info.email
    )
}

pub fn format_opening_hours(hours: &[OpeningHours]) -> String {
    if hours.is_empty() {
        return "No opening hours set.".to_string();
    }
    hours
        .iter()
        .map(|day| {
            format!(
                "{:<10} {}-{}",
                OpeningHours::weekday_name(day.weekday).unwrap_or("?"),
                day.opens_at.format("%H:%M"),
                day.closes_at.format("%H:%M")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_exception(exception: &OpeningException) -> String {
    let hours = match (exception.is_closed, exception.opens_at, exception.closes_at) {
        (true, _, _) => "closed".to_string(),
        (false, Some(opens), Some(closes)) => {
            format!("{}-{}", opens.format("%H:%M"), closes.format("%H:%M"))
        }
        (false, _, _) => "regular hours".to_string(),
    };
    match &exception.note {
        Some(note) => format!("{} {} ({})", exception.date, hours, note),
        None => format!("{} {}", exception.date, hours),
    }
}

pub fn format_exceptions(exceptions: &[OpeningException]) -> String {
    if exceptions.is_empty() {
        return "No exceptions found.".to_string();
    }
    exceptions
        .iter()
        .map(format_exception)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_liveness(liveness: &Liveness) -> String {
    format!(
        "Health:\n  Status: {}\n  Latency: {}ms",
        liveness.status, liveness.latency_ms
    )
}
