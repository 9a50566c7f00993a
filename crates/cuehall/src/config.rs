use std::{env, time::Duration};

use cuehall_core::slots::{ClockError, HallClock, SlotDuration, DEFAULT_TIME_ZONE};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// IANA time zone of the hall (default: "Europe/Helsinki")
    pub time_zone: String,
    /// Slot length used when a request does not ask for one (default: 30)
    pub default_slot_minutes: u32,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HALL_TIMEZONE` - IANA time zone name (default: "Europe/Helsinki")
    /// - `DEFAULT_SLOT_MINUTES` - 15, 30 or 60 (default: 30)
    /// - `REQUEST_TIMEOUT_SECONDS` - request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            time_zone: env::var("HALL_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIME_ZONE.to_string()),
            default_slot_minutes: env::var("DEFAULT_SLOT_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    pub fn clock(&self) -> Result<HallClock, ClockError> {
        HallClock::from_name(&self.time_zone)
    }

    /// The configured slot length, falling back to 30 minutes when the value
    /// is not one of the supported lengths.
    pub fn default_slot(&self) -> SlotDuration {
        SlotDuration::try_from(self.default_slot_minutes).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Ignoring DEFAULT_SLOT_MINUTES");
            SlotDuration::default()
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            default_slot_minutes: 30,
            request_timeout_seconds: 10,
        }
    }
}
