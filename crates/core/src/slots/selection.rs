//! Drag-to-select state machine.
//!
//! `Idle -> Dragging -> Idle`. The transition back to `Idle` either commits a
//! [`SelectionRange`] (pointer-up) or abandons the gesture (cancel, leave,
//! lost capture). Transitions are pure functions over [`DragState`] so the
//! machine can be driven without any UI.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::occupancy::Occupancy;
use super::window::SlotWindow;

/// A committed, half-open selection: `start` inclusive, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Inclusive band of slot rows between the anchor and the hover index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub first: usize,
    pub last: usize,
}

impl Band {
    pub fn new(anchor: usize, hover: usize) -> Self {
        Self {
            first: anchor.min(hover),
            last: anchor.max(hover),
        }
    }

    /// Number of slots in the band, `|hover - anchor| + 1`.
    pub fn slot_count(&self) -> usize {
        self.last - self.first + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.first..=self.last).contains(&index)
    }

    /// `[slot_start(first), slot_start(last) + slot)`.
    pub fn to_range(&self, window: &SlotWindow) -> SelectionRange {
        SelectionRange {
            start: window.slot_start(self.first),
            end: window.slot_end(self.last),
        }
    }
}

/// Interaction state owned by the grid during a single gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    #[default]
    Idle,
    Dragging { anchor: usize, hover: usize },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// The live selection band, if a gesture is in progress.
    pub fn band(&self) -> Option<Band> {
        match *self {
            DragState::Idle => None,
            DragState::Dragging { anchor, hover } => Some(Band::new(anchor, hover)),
        }
    }

    /// Starts a gesture on a free slot. Occupied or out-of-range slots, and a
    /// second pointer-down during a gesture, leave the state unchanged.
    pub fn on_pointer_down(self, index: usize, occupancy: &Occupancy) -> Self {
        match self {
            DragState::Dragging { .. } => self,
            DragState::Idle if index >= occupancy.len() || occupancy.is_occupied(index) => {
                DragState::Idle
            }
            DragState::Idle => DragState::Dragging {
                anchor: index,
                hover: index,
            },
        }
    }

    /// Moves the hover index toward `target` using the clamped walk.
    pub fn on_pointer_move(self, target: usize, occupancy: &Occupancy) -> Self {
        match self {
            DragState::Idle => DragState::Idle,
            DragState::Dragging { anchor, .. } => DragState::Dragging {
                anchor,
                hover: clamped_walk(anchor, target, occupancy),
            },
        }
    }

    /// Ends the gesture. Returns the committed range when one was in progress.
    pub fn on_pointer_up(self, window: &SlotWindow) -> (Self, Option<SelectionRange>) {
        let range = self.band().map(|band| band.to_range(window));
        (DragState::Idle, range)
    }

    /// Abandons the gesture without producing a range.
    pub fn on_pointer_cancel(self) -> Self {
        DragState::Idle
    }
}

/// Walks from `from` toward `to` one slot at a time and returns the last index
/// reached before the grid edge or an occupied slot would be entered.
pub fn clamped_walk(from: usize, to: usize, occupancy: &Occupancy) -> usize {
    let mut last = from;

    if to >= from {
        for index in from..=to {
            if index >= occupancy.len() || occupancy.is_occupied(index) {
                break;
            }
            last = index;
        }
    } else {
        for index in (to..=from).rev() {
            if occupancy.is_occupied(index) {
                break;
            }
            last = index;
        }
    }

    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::occupancy::SlotEvent;
    use crate::slots::window::SlotDuration;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        date().and_hms_opt(h, m, 0).unwrap()
    }

    fn window() -> SlotWindow {
        SlotWindow::new(date(), 8, 22, SlotDuration::Thirty)
    }

    /// Occupancy with only slot 5 (10:30-11:00) taken.
    fn slot_five_taken() -> Occupancy {
        Occupancy::compute(&window(), &[SlotEvent::new(at(10, 30), at(11, 0))])
    }

    #[test]
    fn test_band() {
        let band = Band::new(7, 3);
        assert_eq!(band.first, 3);
        assert_eq!(band.last, 7);
        assert_eq!(band.slot_count(), 5);
        assert!(band.contains(3));
        assert!(band.contains(7));
        assert!(!band.contains(8));
    }

    #[test]
    fn test_pointer_down_on_free_slot_starts_drag() {
        let state = DragState::Idle.on_pointer_down(2, &slot_five_taken());
        assert_eq!(
            state,
            DragState::Dragging {
                anchor: 2,
                hover: 2
            }
        );
    }

    #[test]
    fn test_pointer_down_on_occupied_slot_is_ignored() {
        let state = DragState::Idle.on_pointer_down(5, &slot_five_taken());
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn test_pointer_down_out_of_range_is_ignored() {
        let state = DragState::Idle.on_pointer_down(400, &slot_five_taken());
        assert_eq!(state, DragState::Idle);
    }

    #[test]
    fn test_second_pointer_down_is_ignored() {
        let occupancy = slot_five_taken();
        let state = DragState::Idle
            .on_pointer_down(2, &occupancy)
            .on_pointer_move(4, &occupancy)
            .on_pointer_down(10, &occupancy);
        assert_eq!(
            state,
            DragState::Dragging {
                anchor: 2,
                hover: 4
            }
        );
    }

    #[test]
    fn test_drag_clamps_before_occupied_slot() {
        let occupancy = slot_five_taken();
        let state = DragState::Idle
            .on_pointer_down(2, &occupancy)
            .on_pointer_move(8, &occupancy);

        assert_eq!(state.band(), Some(Band { first: 2, last: 4 }));

        let (state, range) = state.on_pointer_up(&window());
        assert_eq!(state, DragState::Idle);
        assert_eq!(
            range,
            Some(SelectionRange {
                start: at(9, 0),
                end: at(10, 30),
            })
        );
    }

    #[test]
    fn test_drag_upward_clamps_after_occupied_slot() {
        let occupancy = slot_five_taken();
        let state = DragState::Idle
            .on_pointer_down(9, &occupancy)
            .on_pointer_move(1, &occupancy);
        assert_eq!(state.band(), Some(Band { first: 6, last: 9 }));
    }

    #[test]
    fn test_drag_clamps_at_grid_edge() {
        let occupancy = Occupancy::compute(&window(), &[]);
        assert_eq!(clamped_walk(25, 99, &occupancy), 27);
        assert_eq!(clamped_walk(3, 0, &occupancy), 0);
    }

    #[test]
    fn test_moving_back_releases_clamp() {
        let occupancy = slot_five_taken();
        let state = DragState::Idle
            .on_pointer_down(2, &occupancy)
            .on_pointer_move(9, &occupancy)
            .on_pointer_move(3, &occupancy);
        assert_eq!(state.band(), Some(Band { first: 2, last: 3 }));
    }

    #[test]
    fn test_single_slot_selection() {
        let occupancy = slot_five_taken();
        let state = DragState::Idle.on_pointer_down(7, &occupancy);
        let (_, range) = state.on_pointer_up(&window());
        assert_eq!(
            range,
            Some(SelectionRange {
                start: window().slot_start(7),
                end: window().slot_start(7) + SlotDuration::Thirty.as_duration(),
            })
        );
    }

    #[test]
    fn test_cancel_abandons_gesture() {
        let occupancy = slot_five_taken();
        let state = DragState::Idle
            .on_pointer_down(1, &occupancy)
            .on_pointer_move(3, &occupancy)
            .on_pointer_cancel();
        assert_eq!(state, DragState::Idle);

        let (_, range) = state.on_pointer_up(&window());
        assert_eq!(range, None);
    }

    #[test]
    fn test_move_while_idle_is_noop() {
        let state = DragState::Idle.on_pointer_move(3, &slot_five_taken());
        assert_eq!(state, DragState::Idle);
    }
}
