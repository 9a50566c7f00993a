//! The slot grid component: configuration, occupancy, drag state and the
//! render model a UI layer draws from.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::layout::{Block, GridGeometry, RowSpan};
use super::occupancy::{Occupancy, SlotEvent};
use super::selection::{DragState, SelectionRange};
use super::window::SlotWindow;

/// One rendered slot row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    pub index: usize,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub occupied: bool,
    pub in_drag: bool,
}

/// An existing event drawn on top of the rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub rows: RowSpan,
    pub block: Block,
}

/// Highlight layer for a range (the remembered selection or the live drag).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBlock {
    pub rows: RowSpan,
    pub block: Block,
}

/// Everything needed to draw the grid for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridView {
    pub window: SlotWindow,
    pub selectable: bool,
    pub rows: Vec<GridRow>,
    pub events: Vec<EventBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<RangeBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drag: Option<RangeBlock>,
}

impl GridView {
    pub fn occupied_count(&self) -> usize {
        self.rows.iter().filter(|row| row.occupied).count()
    }
}

/// A day's slot grid with its drag-to-select interaction.
///
/// The grid keeps the events handed to [`SlotGrid::new`] or
/// [`SlotGrid::reset`]; occupancy and the rendered event blocks both come
/// from them. The only mutable state is the [`DragState`] of the current
/// gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotGrid {
    window: SlotWindow,
    events: Vec<SlotEvent>,
    occupancy: Occupancy,
    geometry: GridGeometry,
    selectable: bool,
    drag: DragState,
}

impl SlotGrid {
    pub fn new(window: SlotWindow, events: &[SlotEvent]) -> Self {
        Self {
            window,
            events: events.to_vec(),
            occupancy: Occupancy::compute(&window, events),
            geometry: GridGeometry::default(),
            selectable: true,
            drag: DragState::Idle,
        }
    }

    pub fn with_geometry(mut self, geometry: GridGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// A non-selectable grid only displays occupancy.
    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Recomputes occupancy for a new day, window or event list and drops any
    /// gesture in progress.
    pub fn reset(&mut self, window: SlotWindow, events: &[SlotEvent]) {
        self.window = window;
        self.events = events.to_vec();
        self.occupancy = Occupancy::compute(&window, events);
        self.drag = DragState::Idle;
    }

    pub fn window(&self) -> &SlotWindow {
        &self.window
    }

    pub fn events(&self) -> &[SlotEvent] {
        &self.events
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn pointer_down(&mut self, y: f64) {
        if let Some(index) = self.geometry.index_from_y(y, self.window.total_slots()) {
            self.pointer_down_at(index);
        }
    }

    pub fn pointer_down_at(&mut self, index: usize) {
        if !self.selectable {
            return;
        }
        self.drag = self.drag.on_pointer_down(index, &self.occupancy);
    }

    pub fn pointer_move(&mut self, y: f64) {
        if let Some(index) = self.geometry.index_from_y(y, self.window.total_slots()) {
            self.pointer_move_to(index);
        }
    }

    pub fn pointer_move_to(&mut self, index: usize) {
        self.drag = self.drag.on_pointer_move(index, &self.occupancy);
    }

    /// Completes the gesture. Returns the committed range exactly once per
    /// valid gesture; drag state is cleared either way.
    pub fn pointer_up(&mut self) -> Option<SelectionRange> {
        let (next, range) = self.drag.on_pointer_up(&self.window);
        self.drag = next;
        range
    }

    pub fn pointer_cancel(&mut self) {
        self.drag = self.drag.on_pointer_cancel();
    }

    pub fn pointer_leave(&mut self) {
        self.pointer_cancel();
    }

    pub fn lost_pointer_capture(&mut self) {
        self.pointer_cancel();
    }

    /// Builds the render model. `selected` is the parent's remembered range and
    /// is drawn independently of any live drag.
    pub fn render(&self, selected: Option<&SelectionRange>) -> GridView {
        let band = self.drag.band();

        let rows = self
            .window
            .slots()
            .into_iter()
            .map(|slot| GridRow {
                index: slot.index,
                start: slot.start,
                end: slot.end,
                occupied: self.occupancy.is_occupied(slot.index),
                in_drag: band.is_some_and(|band| band.contains(slot.index)),
            })
            .collect();

        let events = self
            .events
            .iter()
            .filter_map(|event| {
                let rows = RowSpan::for_range(&self.window, event.start, event.end)?;
                Some(EventBlock {
                    id: event.id.clone(),
                    label: event.label.clone(),
                    start: event.start,
                    end: event.end,
                    rows,
                    block: self.geometry.block(rows),
                })
            })
            .collect();

        let selected = selected
            .and_then(|range| RowSpan::for_range(&self.window, range.start, range.end))
            .map(|rows| self.range_block(rows));

        let drag = band.map(|band| {
            self.range_block(RowSpan {
                start: band.first,
                end: band.last + 1,
            })
        });

        GridView {
            window: self.window,
            selectable: self.selectable,
            rows,
            events,
            selected,
            drag,
        }
    }

    fn range_block(&self, rows: RowSpan) -> RangeBlock {
        RangeBlock {
            rows,
            block: self.geometry.block(rows),
        }
    }
}
