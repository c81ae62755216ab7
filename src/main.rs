//! Profile-Scout main entry point
//!
//! This is the command-line interface for the Profile-Scout profile fetcher.

use clap::Parser;
use profile_scout::config::load_config;
use profile_scout::fetcher::Coordinator;
use profile_scout::output::{collect_statistics, print_statistics, write_error_payload, write_results};
use profile_scout::{input, ScoutError};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Profile-Scout: a bounded-concurrency profile metadata fetcher
///
/// Profile-Scout fetches public profile metadata for a list of usernames,
/// caps how many requests run at once, and writes one normalized record per
/// username to a single JSON results payload.
#[derive(Parser, Debug)]
#[command(name = "profile-scout")]
#[command(version = "1.0.0")]
#[command(about = "A bounded-concurrency profile metadata fetcher", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// JSON input payload with a "usernames" array, overriding the config list
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write results to this path instead of the configured one
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be fetched without making requests
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // The input payload file takes precedence over the config list
    let usernames = match &cli.input {
        Some(path) => input::load_payload(path)?,
        None => config.input.usernames.clone(),
    };

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.results_path));

    if cli.dry_run {
        handle_dry_run(&config, &usernames);
        return Ok(());
    }

    handle_run(&config, usernames, &output_path).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("profile_scout=info,warn"),
            1 => EnvFilter::new("profile_scout=debug,info"),
            2 => EnvFilter::new("profile_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be fetched
fn handle_dry_run(config: &profile_scout::Config, usernames: &[String]) {
    let usernames = input::sanitize_usernames(usernames);

    println!("=== Profile-Scout Dry Run ===\n");

    println!("Fetch Configuration:");
    println!("  Max concurrent: {}", config.fetch.max_concurrent);
    println!("  Connect timeout: {}s", config.fetch.connect_timeout_secs);
    println!("  Read timeout: {}s", config.fetch.read_timeout_secs);
    println!("  Total timeout: {}s", config.fetch.total_timeout_secs);

    println!("\nEndpoint:");
    println!("  Base URL: {}", config.endpoint.base_url);
    println!("  App id: {}", config.endpoint.app_id);

    println!("\nOutput:");
    println!("  Results: {}", config.output.results_path);

    println!("\nProxies ({}):", config.proxy.urls.len());
    for url in &config.proxy.urls {
        println!("  - {}", url);
    }

    println!("\nUsernames ({}):", usernames.len());
    for username in &usernames {
        println!("  - {}", username);
    }

    println!("\n✓ Configuration is valid");
    if usernames.is_empty() {
        println!("✗ No usernames to fetch; a run would report an input error");
    } else {
        println!("✓ Would fetch {} profiles", usernames.len());
    }
}

/// Handles the main fetch run
async fn handle_run(
    config: &profile_scout::Config,
    usernames: Vec<String>,
    output_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let coordinator = Coordinator::new(config);

    match coordinator.run(usernames).await {
        Ok(output) => {
            write_results(&output, output_path)?;
            let stats = collect_statistics(&output);
            print_statistics(&stats);
            tracing::info!("Results written to {}", output_path.display());
            Ok(())
        }
        Err(err @ ScoutError::EmptyUsernames) => {
            // The sink still receives a payload so downstream consumers see
            // the reason instead of a missing file.
            write_error_payload(&err.to_string(), output_path)?;
            tracing::error!("No usernames provided in input");
            Ok(())
        }
        Err(err) => {
            tracing::error!("Run failed: {}", err);
            Err(err.into())
        }
    }
}
