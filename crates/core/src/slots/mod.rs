//! Slot grid engine.
//!
//! Derives the fixed slots of a day window, marks the ones occupied by existing
//! bookings and runs the drag-to-select interaction that produces a committed,
//! half-open [`SelectionRange`].

mod clock;
mod error;
mod grid;
mod layout;
mod occupancy;
mod selection;
mod window;

pub use clock::{HallClock, DEFAULT_TIME_ZONE};
pub use error::{ClockError, SlotError};
pub use grid::{EventBlock, GridRow, GridView, RangeBlock, SlotGrid};
pub use layout::{Block, GridGeometry, RowSpan, DEFAULT_ROW_HEIGHT};
pub use occupancy::{ranges_overlap, Occupancy, SlotEvent};
pub use selection::{clamped_walk, Band, DragState, SelectionRange};
pub use window::{SlotDuration, SlotWindow, TimeSlot, DEFAULT_END_HOUR, DEFAULT_START_HOUR};
