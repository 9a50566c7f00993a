//! cuehall-client CLI entry point.

use clap::Parser;
use cuehall_client::cli::bookings::BookingsAction;
use cuehall_client::cli::calendars::CalendarsAction;
use cuehall_client::cli::health::HealthAction;
use cuehall_client::cli::notices::NoticesAction;
use cuehall_client::cli::settings::{parse_month, ContactAction, ExceptionsAction, HoursAction};
use cuehall_client::cli::{Cli, Commands};
use cuehall_client::output::{format_output, pretty};
use cuehall_client::reserve::{drag, grid_for, requested_range};
use cuehall_client::{AdminSession, ClientError, CuehallClient};
use cuehall_core::booking::{
    filter_bookings, Booking, Calendar, ContactInfo, CreateBookingRequest, CreateCalendarRequest,
    CreateNoticeRequest, ListExceptionsQuery, Notice, OpeningException, OpeningHours, SlotsQuery,
    UpdateCalendarRequest, UpdateNoticeRequest, UpsertOpeningExceptionRequest,
    UpsertOpeningHoursRequest,
};
use cuehall_core::slots::HallClock;
use cuehall_core::storage::DateRange;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = CuehallClient::new(&cli.base_url);
    let clock = HallClock::from_name(&cli.time_zone)?;
    let format = cli.format;

    match cli.command {
        Commands::Calendars(calendars_cmd) => match calendars_cmd.action {
            CalendarsAction::List => {
                let calendars = client.list::<Calendar>().await?;
                println!("{}", format_output(&calendars, format, |c| pretty::format_calendars(c))?);
            }
            CalendarsAction::Create { name, inactive } => {
                let mut session = AdminSession::<Calendar>::load(client).await?;
                let request = CreateCalendarRequest::new(name).with_active(!inactive);
                let calendar = session.create(request).await?;
                println!(
                    "{}",
                    format_output(&calendar, format, |c| format!(
                        "Created:\n{}",
                        pretty::format_calendar(c)
                    ))?
                );
            }
            CalendarsAction::Get { id } => {
                let calendar = client.get::<Calendar>(id).await?;
                println!("{}", format_output(&calendar, format, pretty::format_calendar)?);
            }
            CalendarsAction::Update { id, name, active } => {
                let mut session = AdminSession::<Calendar>::load(client).await?;
                let request = UpdateCalendarRequest { name, active };
                let calendar = session.update(id, request).await?;
                println!(
                    "{}",
                    format_output(&calendar, format, |c| format!(
                        "Updated:\n{}",
                        pretty::format_calendar(c)
                    ))?
                );
            }
            CalendarsAction::Delete { id } => {
                let mut session = AdminSession::<Calendar>::load(client).await?;
                session.delete(id).await?;
                if !cli.quiet {
                    println!("Deleted calendar {} and its bookings", id);
                }
            }
        },
        Commands::Notices(notices_cmd) => match notices_cmd.action {
            NoticesAction::List => {
                let notices = client.list::<Notice>().await?;
                println!("{}", format_output(&notices, format, |n| pretty::format_notices(n))?);
            }
            NoticesAction::Create {
                title,
                content,
                active,
            } => {
                let mut session = AdminSession::<Notice>::load(client).await?;
                let request = CreateNoticeRequest::new(title, content).with_active(active);
                let notice = session.create(request).await?;
                println!(
                    "{}",
                    format_output(&notice, format, |n| format!(
                        "Created:\n{}",
                        pretty::format_notice(n)
                    ))?
                );
            }
            NoticesAction::Get { id } => {
                let notice = client.get::<Notice>(id).await?;
                println!("{}", format_output(&notice, format, pretty::format_notice)?);
            }
            NoticesAction::Update {
                id,
                title,
                content,
                active,
            } => {
                let mut session = AdminSession::<Notice>::load(client).await?;
                let request = UpdateNoticeRequest {
                    title,
                    content,
                    active,
                };
                let notice = session.update(id, request).await?;
                println!(
                    "{}",
                    format_output(&notice, format, |n| format!(
                        "Updated:\n{}",
                        pretty::format_notice(n)
                    ))?
                );
            }
            NoticesAction::Delete { id } => {
                let mut session = AdminSession::<Notice>::load(client).await?;
                session.delete(id).await?;
                if !cli.quiet {
                    println!("Deleted notice {}", id);
                }
            }
        },
        Commands::Bookings(bookings_cmd) => match bookings_cmd.action {
            BookingsAction::List {
                calendar_id,
                date,
                search,
                sort,
            } => {
                let bookings = client.list_bookings(calendar_id, date).await?;
                let groups = filter_bookings(&bookings, calendar_id, &search, sort.into());
                println!(
                    "{}",
                    format_output(&groups, format, |g| pretty::format_booking_groups(g, &clock))?
                );
            }
            BookingsAction::Create {
                calendar_id,
                date,
                from,
                to,
                name,
                email,
                phone,
                notes,
            } => {
                let range = requested_range(date, from, to)?;
                let mut request =
                    CreateBookingRequest::for_selection(&range, &clock, name, email, phone)?;
                if let Some(notes) = notes {
                    request = request.with_notes(notes);
                }
                let booking = client.create_booking(calendar_id, &request).await?;
                println!(
                    "{}",
                    format_output(&booking, format, |b| format!(
                        "Created:\n{}",
                        pretty::format_booking(b, &clock)
                    ))?
                );
            }
            BookingsAction::Get { id } => {
                let booking = client.get::<Booking>(id).await?;
                println!(
                    "{}",
                    format_output(&booking, format, |b| pretty::format_booking(b, &clock))?
                );
            }
            BookingsAction::Delete { id } => {
                client.delete::<Booking>(id).await?;
                if !cli.quiet {
                    println!("Deleted booking {}", id);
                }
            }
        },
        Commands::Slots(args) => {
            let mut query = SlotsQuery::for_date(args.date.unwrap_or_else(|| clock.today()));
            query.slot_minutes = args.slot_minutes;
            let schedule = client.get_slots(args.calendar_id, &query).await?;
            println!("{}", format_output(&schedule, format, pretty::format_schedule)?);
        }
        Commands::Reserve(args) => {
            let mut query = SlotsQuery::for_date(args.date);
            query.slot_minutes = args.slot_minutes;
            let schedule = client.get_slots(args.calendar_id, &query).await?;

            let mut grid = grid_for(&schedule);
            let gesture = drag(&mut grid, args.from, args.to)?;
            if !cli.quiet || args.dry_run {
                println!("{}", format_output(&gesture, format, pretty::format_gesture)?);
            }
            if args.dry_run {
                return Ok(());
            }

            let mut request = CreateBookingRequest::for_selection(
                &gesture.committed,
                &clock,
                args.name,
                args.email,
                args.phone,
            )?;
            if let Some(notes) = args.notes {
                request = request.with_notes(notes);
            }
            let booking = client.create_booking(args.calendar_id, &request).await?;
            println!(
                "{}",
                format_output(&booking, format, |b| format!(
                    "Booked:\n{}",
                    pretty::format_booking(b, &clock)
                ))?
            );
        }
        Commands::Contact(contact_cmd) => match contact_cmd.action {
            ContactAction::Get => {
                let info = client.get_contact_info().await?;
                println!("{}", format_output(&info, format, pretty::format_contact_info)?);
            }
            ContactAction::Set {
                address,
                phone,
                email,
            } => {
                let info = ContactInfo {
                    address,
                    phone,
                    email,
                };
                let saved = client.put_contact_info(&info).await?;
                println!("{}", format_output(&saved, format, pretty::format_contact_info)?);
            }
        },
        Commands::Hours(hours_cmd) => match hours_cmd.action {
            HoursAction::List => {
                let hours = client.list::<OpeningHours>().await?;
                println!("{}", format_output(&hours, format, |h| pretty::format_opening_hours(h))?);
            }
            HoursAction::Set {
                weekday,
                opens,
                closes,
            } => {
                let mut session = AdminSession::<OpeningHours>::load(client).await?;
                session
                    .upsert(weekday, UpsertOpeningHoursRequest::new(opens, closes))
                    .await?;
                println!(
                    "{}",
                    format_output(&session.items(), format, |h| pretty::format_opening_hours(h))?
                );
            }
            HoursAction::Clear { weekday } => {
                let mut session = AdminSession::<OpeningHours>::load(client).await?;
                session.delete(weekday).await?;
                if !cli.quiet {
                    println!("Cleared opening hours of weekday {}", weekday);
                }
            }
        },
        Commands::Exceptions(exceptions_cmd) => match exceptions_cmd.action {
            ExceptionsAction::List {
                from,
                to,
                month,
                week,
            } => {
                let range = match (month, week) {
                    (Some(month), _) => {
                        let (year, month) = parse_month(&month).map_err(ClientError::InvalidInput)?;
                        Some(DateRange::month(year, month)?)
                    }
                    (None, Some(date)) => Some(DateRange::week(date)),
                    (None, None) => None,
                };
                let query = match range {
                    Some(range) => {
                        ListExceptionsQuery::new().with_range(Some(range.start), Some(range.end))
                    }
                    None => ListExceptionsQuery::new().with_range(from, to),
                };
                let exceptions = client.list_exceptions(&query).await?;
                println!(
                    "{}",
                    format_output(&exceptions, format, |e| pretty::format_exceptions(e))?
                );
            }
            ExceptionsAction::Close { date, note } => {
                let mut request = UpsertOpeningExceptionRequest::closed();
                if let Some(note) = note {
                    request = request.with_note(note);
                }
                let mut session = AdminSession::<OpeningException>::load(client).await?;
                let exception = session.upsert(date, request).await?;
                println!("{}", format_output(&exception, format, pretty::format_exception)?);
            }
            ExceptionsAction::Open {
                date,
                opens,
                closes,
                note,
            } => {
                let mut request = UpsertOpeningExceptionRequest::open(opens, closes);
                if let Some(note) = note {
                    request = request.with_note(note);
                }
                let mut session = AdminSession::<OpeningException>::load(client).await?;
                let exception = session.upsert(date, request).await?;
                println!("{}", format_output(&exception, format, pretty::format_exception)?);
            }
            ExceptionsAction::Delete { date } => {
                client.delete::<OpeningException>(date).await?;
                if !cli.quiet {
                    println!("Deleted exception for {}", date);
                }
            }
        },
        Commands::Health(health_cmd) => match health_cmd.action {
            HealthAction::Live => {
                let liveness = client.livez().await?;
                println!("{}", format_output(&liveness, format, pretty::format_liveness)?);
            }
        },
    }

    Ok(())
}
