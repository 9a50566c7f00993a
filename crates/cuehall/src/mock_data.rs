//! Demo data for local development (`--seed`).

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, NaiveTime};

use cuehall_core::booking::{
    Booking, Calendar, ContactInfo, Notice, OpeningException, OpeningHours,
};
use cuehall_core::slots::SelectionRange;

use crate::state::AppState;

fn time(h: u32, m: u32) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0).with_context(|| format!("invalid time {h:02}:{m:02}"))
}

/// Weekly hours: weekdays 14-23, Friday and Saturday until midnight, Sunday 12-20.
fn weekly_hours() -> Result<Vec<OpeningHours>> {
    let mut hours = Vec::new();
    for weekday in 1..=4 {
        hours.push(OpeningHours::new(weekday, time(14, 0)?, time(23, 0)?));
    }
    hours.push(OpeningHours::new(5, time(14, 0)?, time(0, 0)?));
    hours.push(OpeningHours::new(6, time(12, 0)?, time(0, 0)?));
    hours.push(OpeningHours::new(7, time(12, 0)?, time(20, 0)?));
    Ok(hours)
}

/// Populates every collection and books a few tables for `today`.
pub async fn seed_demo_data(state: &AppState, today: NaiveDate) -> Result<()> {
    let calendars = [
        Calendar::new("Pool 1"),
        Calendar::new("Pool 2"),
        Calendar::new("Snooker"),
        Calendar::new("Carom").with_active(false),
    ];
    for calendar in &calendars {
        state.calendar_repo.create(calendar).await?;
    }

    for hours in weekly_hours()? {
        state.hours_repo.upsert(&hours).await?;
    }

    if let Some(christmas_eve) = NaiveDate::from_ymd_opt(today.year(), 12, 24) {
        state
            .exception_repo
            .upsert(&OpeningException::closed(christmas_eve).with_note("Christmas Eve"))
            .await?;
    }

    state
        .notice_repo
        .create(
            &Notice::new(
                "League night",
                "The Tuesday 8-ball league starts at 18:00. Tables 1-2 are reserved.",
            )
            .with_active(true),
        )
        .await?;
    state
        .notice_repo
        .create(&Notice::new(
            "Summer hours",
            "We open at 16:00 on weekdays during July.",
        ))
        .await?;

    state
        .contact_repo
        .put_contact_info(&ContactInfo {
            address: "Hämeenkatu 10, 33100 Tampere".to_string(),
            phone: "+358 40 123 4567".to_string(),
            email: "tables@cuehall.example".to_string(),
        })
        .await?;

    let day = |h: u32, m: u32| -> Result<_> { Ok(today.and_time(time(h, m)?)) };
    let demo_bookings = [
        (&calendars[0], "Matti Virtanen", day(16, 0)?, day(17, 30)?),
        (&calendars[0], "Aino Korhonen", day(19, 0)?, day(20, 0)?),
        (&calendars[2], "Snooker club", day(18, 0)?, day(21, 0)?),
    ];
    for (calendar, name, start, end) in demo_bookings {
        let (start, end) = state
            .clock
            .range_to_instants(&SelectionRange { start, end })?;
        let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
        let booking = Booking::new(calendar.id, name, email, "+358 50 555 0100", start, end);
        state.booking_repo.create_booking(&booking).await?;
    }

    tracing::info!(
        calendars = calendars.len(),
        bookings = 3,
        %today,
        "Seeded demo data"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_demo_data() {
        let state = AppState::default();
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        seed_demo_data(&state, today).await.unwrap();

        let calendars = state.calendar_repo.list().await.unwrap();
        assert_eq!(calendars.len(), 4);
        assert_eq!(state.hours_repo.list().await.unwrap().len(), 7);

        let bookings = state
            .booking_repo
            .list_bookings(calendars[0].id, None)
            .await
            .unwrap();
        assert_eq!(bookings.len(), 2);
        assert!(state.contact_repo.get_contact_info().await.unwrap().is_some());
    }

    #[test]
    fn test_weekly_hours_are_valid() {
        for hours in weekly_hours().unwrap() {
            assert!(cuehall_core::booking::validate_opening_hours(&hours).is_ok());
        }
    }
}
