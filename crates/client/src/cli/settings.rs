//! Hall settings CLI commands: contact info, opening hours and exceptions.

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};

use super::parse_hhmm;

#[derive(Debug, Parser)]
pub struct ContactCommand {
    #[command(subcommand)]
    pub action: ContactAction,
}

#[derive(Debug, Subcommand)]
pub enum ContactAction {
    /// Show the contact details.
    Get,
    /// Replace the contact details.
    Set {
        #[arg(long)]
        address: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
    },
}

#[derive(Debug, Parser)]
pub struct HoursCommand {
    #[command(subcommand)]
    pub action: HoursAction,
}

#[derive(Debug, Subcommand)]
pub enum HoursAction {
    /// Show the weekly opening hours.
    List,
    /// Set the hours of one weekday.
    Set {
        /// Weekday, 1 = Monday .. 7 = Sunday.
        weekday: u8,
        /// Opening time (HH:MM).
        #[arg(long, value_parser = parse_hhmm)]
        opens: NaiveTime,
        /// Closing time (HH:MM); 00:00 closes at midnight.
        #[arg(long, value_parser = parse_hhmm)]
        closes: NaiveTime,
    },
    /// Remove the hours of one weekday, closing it.
    Clear { weekday: u8 },
}

#[derive(Debug, Parser)]
pub struct ExceptionsCommand {
    #[command(subcommand)]
    pub action: ExceptionsAction,
}

#[derive(Debug, Subcommand)]
pub enum ExceptionsAction {
    /// List exceptions, optionally limited to a range.
    List {
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Only the given month (YYYY-MM).
        #[arg(long, conflicts_with_all = ["from", "to", "week"])]
        month: Option<String>,
        /// Only the Monday-to-Sunday week holding this date.
        #[arg(long, conflicts_with_all = ["from", "to"])]
        week: Option<NaiveDate>,
    },
    /// Close the hall on a date.
    Close {
        date: NaiveDate,
        #[arg(long)]
        note: Option<String>,
    },
    /// Open the hall with special hours on a date.
    Open {
        date: NaiveDate,
        #[arg(long, value_parser = parse_hhmm)]
        opens: NaiveTime,
        #[arg(long, value_parser = parse_hhmm)]
        closes: NaiveTime,
        #[arg(long)]
        note: Option<String>,
    },
    /// Remove the exception, restoring the weekly hours.
    Delete { date: NaiveDate },
}

/// Parses `YYYY-MM` into a year and month.
pub fn parse_month(value: &str) -> Result<(i32, u32), String> {
    let (year, month) = value
        .trim()
        .split_once('-')
        .ok_or_else(|| format!("expected YYYY-MM, got '{}'", value))?;
    let year = year
        .parse()
        .map_err(|_| format!("invalid year in '{}'", value))?;
    let month = month
        .parse()
        .map_err(|_| format!("invalid month in '{}'", value))?;
    Ok((year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2025-12"), Ok((2025, 12)));
        assert_eq!(parse_month("2025-13"), Ok((2025, 13)));
        assert!(parse_month("December").is_err());
        assert!(parse_month("2025-xx").is_err());
    }
}
