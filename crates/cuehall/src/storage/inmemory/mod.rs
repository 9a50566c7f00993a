//! In-memory storage backend.
//!
//! Every collection lives in a `Vec` behind an `Arc<RwLock<_>>`. Data is lost
//! when the process exits. Collection-wide rules (overlapping bookings, the
//! active notice cap) are checked while the write lock is held.

mod repository;

pub use repository::{InMemoryBookings, InMemoryCollection, InMemoryContactInfo};
