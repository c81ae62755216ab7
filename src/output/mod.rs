//! Output module for the results payload and run summaries
//!
//! This module handles:
//! - Assembling the per-username records into the single output payload
//! - Writing the results (or the input-error payload) as JSON
//! - Collecting and printing run statistics

mod report;
pub mod stats;

pub use report::{write_error_payload, write_results, ScrapeOutput};
pub use stats::{collect_statistics, print_statistics, RunStatistics};
