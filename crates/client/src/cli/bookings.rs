//! Booking CLI commands.

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use super::parse_hhmm;

pub use cuehall_core::booking::SortDirection as CoreSortDirection;

/// Booking commands.
#[derive(Debug, Parser)]
pub struct BookingsCommand {
    #[command(subcommand)]
    pub action: BookingsAction,
}

/// Sort order for the booking list (with clap ValueEnum).
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum SortOrder {
    /// Earliest first.
    #[default]
    Asc,
    /// Latest first.
    Desc,
}

impl From<SortOrder> for CoreSortDirection {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => CoreSortDirection::Asc,
            SortOrder::Desc => CoreSortDirection::Desc,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum BookingsAction {
    /// List a calendar's bookings grouped by date.
    List {
        /// Calendar ID.
        calendar_id: Uuid,
        /// Only bookings on this local day (YYYY-MM-DD).
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Case-insensitive search over name, email, phone and notes.
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, value_enum, default_value = "asc")]
        sort: SortOrder,
    },
    /// Create a booking from explicit wall-clock times.
    Create {
        /// Calendar ID.
        calendar_id: Uuid,
        /// Local day (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,
        /// Start time (HH:MM).
        #[arg(long, value_parser = parse_hhmm)]
        from: NaiveTime,
        /// End time (HH:MM); 00:00 is midnight at the end of the day.
        #[arg(long, value_parser = parse_hhmm)]
        to: NaiveTime,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Get booking by ID.
    Get { id: Uuid },
    /// Delete booking by ID.
    Delete { id: Uuid },
}
