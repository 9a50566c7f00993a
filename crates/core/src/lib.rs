//! Functional core of cuehall: the slot grid engine, the booking domain and
//! the storage contracts the server implements. No I/O happens here.

pub mod booking;
pub mod resource;
pub mod serde;
pub mod slots;
pub mod storage;
