//! Output formatting functions.

pub mod json;
pub mod pretty;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Render a value as JSON or with its human-readable formatter.
pub fn format_output<T: serde::Serialize>(
    value: &T,
    format: OutputFormat,
    pretty: impl FnOnce(&T) -> String,
) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => Ok(pretty(value)),
    }
}
