use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::window::SlotWindow;

/// Open-interval overlap test for two half-open ranges.
///
/// Ranges that only touch at a boundary do not overlap.
pub fn ranges_overlap<T: PartialOrd>(a_start: T, a_end: T, b_start: T, b_end: T) -> bool {
    a_start < b_end && b_start < a_end
}

/// An existing booking as seen by the grid, in hall wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SlotEvent {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: None,
            start,
            end,
            label: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Which slots of a window intersect at least one event.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Occupancy {
    occupied: Vec<bool>,
}

impl Occupancy {
    /// Marks slot `i` occupied iff some event satisfies `start < slot_end && slot_start < end`.
    ///
    /// Events may be unsorted and may overlap each other.
    pub fn compute(window: &SlotWindow, events: &[SlotEvent]) -> Self {
        let slots = window.slots();
        let occupied = slots
            .iter()
            .map(|slot| {
                events
                    .iter()
                    .any(|event| ranges_overlap(slot.start, slot.end, event.start, event.end))
            })
            .collect();

        Self { occupied }
    }

    /// Number of slots covered by this occupancy map.
    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Out-of-range indices are never occupied.
    pub fn is_occupied(&self, index: usize) -> bool {
        self.occupied.get(index).copied().unwrap_or(false)
    }

    pub fn occupied_indices(&self) -> Vec<usize> {
        self.occupied
            .iter()
            .enumerate()
            .filter_map(|(index, occupied)| occupied.then_some(index))
            .collect()
    }

    pub fn free_count(&self) -> usize {
        self.occupied.iter().filter(|occupied| !**occupied).count()
    }
}
