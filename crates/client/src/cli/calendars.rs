//! Calendar CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Calendar management commands.
#[derive(Debug, Parser)]
pub struct CalendarsCommand {
    #[command(subcommand)]
    pub action: CalendarsAction,
}

/// Available calendar actions.
#[derive(Debug, Subcommand)]
pub enum CalendarsAction {
    /// List all calendars.
    List,
    /// Create a new calendar.
    Create {
        /// Calendar name.
        #[arg(long)]
        name: String,
        /// Hide the calendar from the booking flow.
        #[arg(long)]
        inactive: bool,
    },
    /// Get calendar by ID.
    Get {
        /// Calendar ID.
        id: Uuid,
    },
    /// Update a calendar.
    Update {
        /// Calendar ID.
        id: Uuid,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// Whether the calendar takes bookings.
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a calendar and its bookings.
    Delete {
        /// Calendar ID.
        id: Uuid,
    },
}
