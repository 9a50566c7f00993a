//! cuehall_client - HTTP client and CLI for the cuehall booking API.

pub mod admin;
pub mod cli;
pub mod client;
pub mod error;
pub mod output;
pub mod reserve;

pub use admin::AdminSession;
pub use client::CuehallClient;
pub use error::{ClientError, Result};
