//! Generic editable resources.
//!
//! Every back-office collection (calendars, notices, opening hours, ...) is
//! described by the same traits, so the server handlers, the HTTP client and
//! the optimistic client-side list are written once.

mod error;
mod list;
mod traits;

pub use error::EditError;
pub use list::{Change, EditableList, PendingChange};
pub use traits::{Editable, Resource, Upsertable};
