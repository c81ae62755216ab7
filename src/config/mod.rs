//! Configuration module for Profile-Scout
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use profile_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Concurrency cap: {}", config.fetch.max_concurrent);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, EndpointConfig, FetchConfig, InputConfig, OutputConfig, ProxyConfig};

// Re-export parser functions
pub use parser::load_config;
