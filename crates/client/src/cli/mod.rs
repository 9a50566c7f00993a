//! CLI command definitions.

pub mod bookings;
pub mod calendars;
pub mod health;
pub mod notices;
pub mod settings;
pub mod slots;

use chrono::NaiveTime;
use clap::{Parser, Subcommand, ValueEnum};
use cuehall_core::slots::DEFAULT_TIME_ZONE;

use crate::client::DEFAULT_BASE_URL;

/// CLI client for the cuehall booking API.
#[derive(Debug, Parser)]
#[command(name = "cuehall-client")]
#[command(about = "CLI client for the cuehall booking API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "CUEHALL_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// IANA time zone of the hall; wall-clock arguments are read in it.
    #[arg(long, env = "HALL_TIMEZONE", default_value = DEFAULT_TIME_ZONE)]
    pub time_zone: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calendar (table) management.
    Calendars(calendars::CalendarsCommand),
    /// Front page notices.
    Notices(notices::NoticesCommand),
    /// Bookings of a calendar.
    Bookings(bookings::BookingsCommand),
    /// Show a calendar's slot grid for a day.
    Slots(slots::SlotsArgs),
    /// Select a range on the slot grid and book it.
    Reserve(slots::ReserveArgs),
    /// Contact details of the hall.
    Contact(settings::ContactCommand),
    /// Weekly opening hours.
    Hours(settings::HoursCommand),
    /// Opening exceptions for single dates.
    Exceptions(settings::ExceptionsCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}

/// Parses `HH:MM`.
pub fn parse_hhmm(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| format!("expected HH:MM, got '{}'", value))
}
