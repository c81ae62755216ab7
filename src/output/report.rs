//! Results payload assembly and serialization

use crate::fetcher::ProfileRecord;
use crate::ScoutError;
use serde::Serialize;
use serde_json::json;
use std::path::Path;

/// The complete, order-preserving collection of per-username outcomes
///
/// Aggregation never fails and never filters: one record per input
/// username, in input order, serialized as `{"results": [...]}`.
#[derive(Debug, Serialize)]
pub struct ScrapeOutput {
    pub results: Vec<ProfileRecord>,
}

impl ScrapeOutput {
    /// Wraps completed records into the output payload
    pub fn new(results: Vec<ProfileRecord>) -> Self {
        Self { results }
    }

    /// Number of records in the payload
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the payload holds no records
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Writes the results payload as pretty-printed JSON
///
/// # Arguments
///
/// * `output` - The completed run output
/// * `path` - Destination file path
pub fn write_results(output: &ScrapeOutput, path: &Path) -> Result<(), ScoutError> {
    let rendered = serde_json::to_string_pretty(output)?;
    std::fs::write(path, rendered)?;
    Ok(())
}

/// Writes the distinct input-error payload
///
/// Used when the run short-circuits before any fetch; the sink receives
/// `{"error": <message>}` instead of a results payload.
pub fn write_error_payload(message: &str, path: &Path) -> Result<(), ScoutError> {
    let rendered = serde_json::to_string_pretty(&json!({ "error": message }))?;
    std::fs::write(path, rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::FetchFailure;
    use serde_json::Value;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_results_shape() {
        let output = ScrapeOutput::new(vec![ProfileRecord::failure(
            "alice".to_string(),
            FetchFailure::BadStatus(503),
            None,
        )]);

        let file = NamedTempFile::new().unwrap();
        write_results(&output, file.path()).unwrap();

        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        let results = written["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["username"], "alice");
        assert_eq!(results[0]["status_code"], 503);
    }

    #[test]
    fn test_write_error_payload_shape() {
        let file = NamedTempFile::new().unwrap();
        write_error_payload("usernames list is required", file.path()).unwrap();

        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(written["error"], "usernames list is required");
        assert!(written.get("results").is_none());
    }

    #[test]
    fn test_empty_output_still_serializes() {
        let output = ScrapeOutput::new(vec![]);
        assert!(output.is_empty());
        assert_eq!(output.len(), 0);
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["results"], serde_json::json!([]));
    }
}
