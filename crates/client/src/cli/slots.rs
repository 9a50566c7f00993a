//! Slot grid CLI commands.

use chrono::{NaiveDate, NaiveTime};
use clap::Args;
use uuid::Uuid;

use super::parse_hhmm;

/// Arguments of `slots`.
#[derive(Debug, Args)]
pub struct SlotsArgs {
    /// Calendar ID.
    pub calendar_id: Uuid,
    /// Local day (YYYY-MM-DD); today in the hall's time zone by default.
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Slot length: 15, 30 or 60. The server default applies when omitted.
    #[arg(long)]
    pub slot_minutes: Option<u32>,
}

/// Arguments of `reserve`.
#[derive(Debug, Args)]
pub struct ReserveArgs {
    /// Calendar ID.
    pub calendar_id: Uuid,
    /// Local day (YYYY-MM-DD).
    #[arg(long)]
    pub date: NaiveDate,
    /// Where the drag starts (HH:MM).
    #[arg(long, value_parser = parse_hhmm)]
    pub from: NaiveTime,
    /// Where the drag should end (HH:MM). It stops early at a booked slot.
    #[arg(long, value_parser = parse_hhmm)]
    pub to: NaiveTime,
    #[arg(long)]
    pub slot_minutes: Option<u32>,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub notes: Option<String>,
    /// Show the committed range without booking it.
    #[arg(long)]
    pub dry_run: bool,
}
