//! JSON output formatting.

use crate::error::Result;

/// Format a value as compact JSON on a single line, suitable for piping to `jq`.
pub fn format_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
