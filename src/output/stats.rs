//! Run statistics
//!
//! Collects success/failure counts from a completed run for the console
//! summary. The payload on disk stays untouched; this is display only.

use crate::output::ScrapeOutput;

/// Summary of one fetch run
#[derive(Debug, Clone)]
pub struct RunStatistics {
    /// Total records produced
    pub total: usize,

    /// Records with a success status
    pub ok: usize,

    /// Records carrying an error
    pub failed: usize,

    /// Username and error message for every failed record
    pub failures: Vec<(String, String)>,
}

/// Collects statistics from a completed run
pub fn collect_statistics(output: &ScrapeOutput) -> RunStatistics {
    let total = output.results.len();
    let failures: Vec<(String, String)> = output
        .results
        .iter()
        .filter_map(|record| {
            record
                .error_message()
                .map(|message| (record.username().to_string(), message.to_string()))
        })
        .collect();

    RunStatistics {
        total,
        ok: total - failures.len(),
        failed: failures.len(),
        failures,
    }
}

/// Prints a run summary to stdout
pub fn print_statistics(stats: &RunStatistics) {
    println!("=== Fetch Summary ===");
    println!("Total:  {}", stats.total);
    println!("Ok:     {}", stats.ok);
    println!("Failed: {}", stats.failed);

    if !stats.failures.is_empty() {
        println!("\nFailures:");
        for (username, error) in &stats.failures {
            println!("  - {}: {}", username, error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::{FetchFailure, ProfileRecord};
    use serde_json::json;

    #[test]
    fn test_collect_statistics() {
        let output = ScrapeOutput::new(vec![
            ProfileRecord::success("alice".to_string(), json!({"data": {}}), None),
            ProfileRecord::failure("bob".to_string(), FetchFailure::Unauthorized, None),
            ProfileRecord::failure(
                "carol".to_string(),
                FetchFailure::ConnectTimeout,
                Some("http://proxy.example.com:8080".to_string()),
            ),
        ]);

        let stats = collect_statistics(&output);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.ok, 1);
        assert_eq!(stats.failed, 2);
        assert_eq!(
            stats.failures,
            vec![
                ("bob".to_string(), "Unauthorized error".to_string()),
                ("carol".to_string(), "Proxy connect timeout".to_string()),
            ]
        );
    }

    #[test]
    fn test_collect_statistics_all_ok() {
        let output = ScrapeOutput::new(vec![ProfileRecord::success(
            "alice".to_string(),
            json!({"data": {}}),
            None,
        )]);

        let stats = collect_statistics(&output);
        assert_eq!(stats.ok, 1);
        assert_eq!(stats.failed, 0);
        assert!(stats.failures.is_empty());
    }
}
