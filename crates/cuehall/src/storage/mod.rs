//! Storage backends for the booking store.

pub mod inmemory;
