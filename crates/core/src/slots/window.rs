use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::error::SlotError;

/// Default first visible hour of the booking grid.
pub const DEFAULT_START_HOUR: u32 = 8;
/// Default exclusive last hour of the booking grid.
pub const DEFAULT_END_HOUR: u32 = 22;

/// Length of a single slot in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SlotDuration {
    Fifteen,
    #[default]
    Thirty,
    Sixty,
}

impl SlotDuration {
    /// Minutes per slot.
    pub fn minutes(self) -> u32 {
        match self {
            SlotDuration::Fifteen => 15,
            SlotDuration::Thirty => 30,
            SlotDuration::Sixty => 60,
        }
    }

    /// Number of slots that fit in one hour.
    pub fn slots_per_hour(self) -> u32 {
        60 / self.minutes()
    }

    pub fn as_duration(self) -> Duration {
        Duration::minutes(i64::from(self.minutes()))
    }
}

impl TryFrom<u32> for SlotDuration {
    type Error = SlotError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        match minutes {
            15 => Ok(SlotDuration::Fifteen),
            30 => Ok(SlotDuration::Thirty),
            60 => Ok(SlotDuration::Sixty),
            other => Err(SlotError::UnsupportedDuration(other)),
        }
    }
}

impl From<SlotDuration> for u32 {
    fn from(duration: SlotDuration) -> Self {
        duration.minutes()
    }
}

/// A single derived slot: the half-open wall-clock interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub index: usize,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// The visible part of a day, discretized into fixed-size slots.
///
/// All values are hall wall-clock time. A window whose end hour is not after
/// its start hour has no slots at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotWindow {
    pub date: NaiveDate,
    pub start_hour: u32,
    pub end_hour: u32,
    pub slot: SlotDuration,
}

impl SlotWindow {
    pub fn new(date: NaiveDate, start_hour: u32, end_hour: u32, slot: SlotDuration) -> Self {
        Self {
            date,
            start_hour,
            end_hour,
            slot,
        }
    }

    /// Window using the default 08:00-22:00 hours and 30 minute slots.
    pub fn with_defaults(date: NaiveDate) -> Self {
        Self::new(
            date,
            DEFAULT_START_HOUR,
            DEFAULT_END_HOUR,
            SlotDuration::default(),
        )
    }

    /// `(end_hour - start_hour) * slots_per_hour`, or zero for a degenerate window.
    pub fn total_slots(&self) -> usize {
        let end_hour = self.end_hour.min(24);
        if end_hour <= self.start_hour {
            return 0;
        }
        ((end_hour - self.start_hour) * self.slot.slots_per_hour()) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.total_slots() == 0
    }

    /// Wall-clock start of slot zero. A start hour above 24 is clamped to 24.
    pub fn window_start(&self) -> NaiveDateTime {
        self.date.and_time(NaiveTime::MIN) + Duration::hours(i64::from(self.start_hour.min(24)))
    }

    /// Wall-clock end of the last slot (exclusive).
    pub fn window_end(&self) -> NaiveDateTime {
        self.slot_start(self.total_slots())
    }

    /// `dayAnchor + start_hour * 60min + index * slot`.
    pub fn slot_start(&self, index: usize) -> NaiveDateTime {
        self.window_start() + Duration::minutes(index as i64 * i64::from(self.slot.minutes()))
    }

    pub fn slot_end(&self, index: usize) -> NaiveDateTime {
        self.slot_start(index) + self.slot.as_duration()
    }

    pub fn slot(&self, index: usize) -> Option<TimeSlot> {
        (index < self.total_slots()).then(|| TimeSlot {
            index,
            start: self.slot_start(index),
            end: self.slot_end(index),
        })
    }

    /// All slots of the window in order.
    pub fn slots(&self) -> Vec<TimeSlot> {
        (0..self.total_slots())
            .map(|index| TimeSlot {
                index,
                start: self.slot_start(index),
                end: self.slot_end(index),
            })
            .collect()
    }

    /// Index of the slot containing the given wall-clock time, if it is inside the window.
    pub fn index_of(&self, time: NaiveDateTime) -> Option<usize> {
        if time < self.window_start() || time >= self.window_end() {
            return None;
        }
        let minutes = (time - self.window_start()).num_minutes();
        Some((minutes / i64::from(self.slot.minutes())) as usize)
    }
}
