//! Mapping between pointer coordinates, slot rows and wall-clock ranges.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::window::SlotWindow;

/// Pixel height of one slot row.
pub const DEFAULT_ROW_HEIGHT: f64 = 36.0;

/// Half-open span of rows `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSpan {
    pub start: usize,
    pub end: usize,
}

impl RowSpan {
    /// Rows touched by a wall-clock range, clipped to the window.
    ///
    /// The start offset is floored and the end offset is ceiled to whole slots.
    /// Returns `None` when the range lies entirely outside the window.
    pub fn for_range(window: &SlotWindow, start: NaiveDateTime, end: NaiveDateTime) -> Option<Self> {
        let total = window.total_slots() as i64;
        if total == 0 {
            return None;
        }

        let slot = i64::from(window.slot.minutes());
        let origin = window.window_start();
        let start_offset = (start - origin).num_minutes();
        let end_offset = (end - origin).num_minutes();

        let first = start_offset.div_euclid(slot).max(0);
        let end_exclusive = (end_offset + slot - 1).div_euclid(slot).min(total);

        if end_exclusive <= 0 || first >= total {
            return None;
        }

        Some(Self {
            start: first as usize,
            end: end_exclusive.max(first) as usize,
        })
    }

    pub fn rows(&self) -> usize {
        self.end - self.start
    }
}

/// Vertical placement of a block relative to the top of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub top: f64,
    pub height: f64,
}

/// Where the grid sits on screen and how tall its rows are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    pub top: f64,
    pub row_height: f64,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            top: 0.0,
            row_height: DEFAULT_ROW_HEIGHT,
        }
    }
}

impl GridGeometry {
    pub fn new(top: f64, row_height: f64) -> Self {
        Self { top, row_height }
    }

    /// `floor((y - top) / row_height)` clamped to `[0, total_slots - 1]`.
    pub fn index_from_y(&self, y: f64, total_slots: usize) -> Option<usize> {
        if total_slots == 0 || self.row_height <= 0.0 {
            return None;
        }
        let raw = ((y - self.top) / self.row_height).floor();
        if raw.is_nan() {
            return None;
        }
        Some(raw.clamp(0.0, (total_slots - 1) as f64) as usize)
    }

    /// Block for a row span; never shorter than half a row.
    pub fn block(&self, span: RowSpan) -> Block {
        Block {
            top: span.start as f64 * self.row_height,
            height: (self.row_height / 2.0).max(span.rows() as f64 * self.row_height),
        }
    }

    /// Y coordinate of the middle of a row, handy for synthesizing pointer input.
    pub fn row_center(&self, index: usize) -> f64 {
        self.top + (index as f64 + 0.5) * self.row_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::window::SlotDuration;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn window() -> SlotWindow {
        SlotWindow::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            8,
            22,
            SlotDuration::Thirty,
        )
    }

    #[test]
    fn test_row_span_inside_window() {
        let span = RowSpan::for_range(&window(), at(10, 0), at(11, 0)).unwrap();
        assert_eq!(span, RowSpan { start: 4, end: 6 });
        assert_eq!(span.rows(), 2);
    }

    #[test]
    fn test_row_span_rounds_outward() {
        let span = RowSpan::for_range(&window(), at(10, 10), at(10, 40)).unwrap();
        assert_eq!(span, RowSpan { start: 4, end: 6 });
    }

    #[test]
    fn test_row_span_clipped() {
        let span = RowSpan::for_range(&window(), at(6, 0), at(9, 0)).unwrap();
        assert_eq!(span, RowSpan { start: 0, end: 2 });

        let span = RowSpan::for_range(&window(), at(21, 0), at(23, 30)).unwrap();
        assert_eq!(span, RowSpan { start: 26, end: 28 });
    }

    #[test]
    fn test_row_span_outside_window() {
        assert_eq!(RowSpan::for_range(&window(), at(6, 0), at(8, 0)), None);
        assert_eq!(RowSpan::for_range(&window(), at(22, 0), at(23, 0)), None);
    }

    #[test]
    fn test_row_span_empty_window() {
        let window = SlotWindow::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            22,
            8,
            SlotDuration::Thirty,
        );
        assert_eq!(RowSpan::for_range(&window, at(10, 0), at(11, 0)), None);
    }

    #[test]
    fn test_index_from_y() {
        let geometry = GridGeometry::new(100.0, 36.0);
        assert_eq!(geometry.index_from_y(100.0, 28), Some(0));
        assert_eq!(geometry.index_from_y(135.9, 28), Some(0));
        assert_eq!(geometry.index_from_y(136.0, 28), Some(1));
        assert_eq!(geometry.index_from_y(50.0, 28), Some(0));
        assert_eq!(geometry.index_from_y(10_000.0, 28), Some(27));
        assert_eq!(geometry.index_from_y(150.0, 0), None);
    }

    #[test]
    fn test_row_center_maps_back_to_row() {
        let geometry = GridGeometry::new(12.0, 20.0);
        for index in 0..10 {
            assert_eq!(
                geometry.index_from_y(geometry.row_center(index), 10),
                Some(index)
            );
        }
    }

    #[test]
    fn test_block_minimum_height() {
        let geometry = GridGeometry::default();
        let block = geometry.block(RowSpan { start: 3, end: 3 });
        assert_eq!(block.top, 108.0);
        assert_eq!(block.height, 18.0);

        let block = geometry.block(RowSpan { start: 4, end: 6 });
        assert_eq!(block.height, 72.0);
    }
}
