//! Input payload loading and username sanitization
//!
//! The input boundary accepts a list of usernames either from the config
//! file or from a JSON payload file shaped `{"usernames": [...]}`. Entries
//! are trimmed and blanks discarded; deciding what an empty result means is
//! left to the caller.

use crate::ScoutError;
use serde_json::Value;
use std::path::Path;

/// Loads a JSON input payload from disk
///
/// The payload is an object with a `usernames` array. A missing or
/// non-array `usernames` field yields an empty list; non-string entries are
/// discarded rather than rejected.
///
/// # Arguments
///
/// * `path` - Path to the JSON payload file
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The raw (unsanitized) username entries
/// * `Err(ScoutError)` - The file could not be read or parsed as JSON
pub fn load_payload(path: &Path) -> Result<Vec<String>, ScoutError> {
    let content = std::fs::read_to_string(path)?;
    let payload: Value = serde_json::from_str(&content)?;

    let usernames = payload
        .get("usernames")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.as_str())
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default();

    Ok(usernames)
}

/// Trims every entry and drops the blanks
pub fn sanitize_usernames(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|u| u.trim())
        .filter(|u| !u.is_empty())
        .map(|u| u.to_string())
        .collect()
}
