//! Profile-Scout: a bounded-concurrency profile metadata fetcher
//!
//! This crate fetches public profile metadata for a list of usernames from a
//! single remote JSON endpoint, normalizes every response and error shape into
//! one uniform record per username, and caps how many requests are in flight
//! at once.

pub mod config;
pub mod fetcher;
pub mod input;
pub mod output;
pub mod proxy;

use thiserror::Error;

/// Main error type for Profile-Scout operations
///
/// Per-username fetch failures are not errors: the fetcher normalizes them
/// into result records and they never propagate. This type covers run-level
/// conditions only.
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("usernames list is required")]
    EmptyUsernames,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Profile-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use fetcher::{Coordinator, FetchFailure, FetchPool, ProfileFetcher, ProfileRecord};
pub use output::ScrapeOutput;
pub use proxy::{ProxyProvider, RoundRobinProxies};
