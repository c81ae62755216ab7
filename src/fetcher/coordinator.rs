//! Run orchestration
//!
//! The coordinator wires the proxy provider, fetcher, and slot pool
//! together, enforces the input boundary, and aggregates the per-username
//! records into the single output payload.

use crate::config::Config;
use crate::fetcher::client::FetchTimeouts;
use crate::fetcher::profile::ProfileFetcher;
use crate::fetcher::scheduler::{run_fetches, FetchPool};
use crate::input::sanitize_usernames;
use crate::output::ScrapeOutput;
use crate::proxy::{ProxyProvider, RoundRobinProxies};
use crate::ScoutError;
use std::sync::Arc;
use std::time::Instant;

/// Orchestrates one fetch run end to end
pub struct Coordinator {
    fetcher: Arc<ProfileFetcher>,
    pool: FetchPool,
}

impl Coordinator {
    /// Creates a coordinator from validated configuration
    pub fn new(config: &Config) -> Self {
        let proxies = RoundRobinProxies::from_urls(&config.proxy.urls)
            .map(|provider| Arc::new(provider) as Arc<dyn ProxyProvider>);

        let fetcher = Arc::new(ProfileFetcher::new(
            &config.endpoint,
            FetchTimeouts::from_config(&config.fetch),
            proxies,
        ));

        Self {
            fetcher,
            pool: FetchPool::new(config.fetch.max_concurrent),
        }
    }

    /// Runs one fetch per username and aggregates the records
    ///
    /// Usernames are trimmed and blanks dropped first; an empty result is
    /// the one fatal input error and short-circuits before any request is
    /// made. Individual fetch failures are data, not errors: the returned
    /// output always holds one record per surviving username, in input
    /// order.
    ///
    /// # Arguments
    ///
    /// * `usernames` - Raw username entries from the input boundary
    ///
    /// # Returns
    ///
    /// * `Ok(ScrapeOutput)` - One record per username, input order
    /// * `Err(ScoutError::EmptyUsernames)` - Nothing left after sanitization
    pub async fn run(&self, usernames: Vec<String>) -> Result<ScrapeOutput, ScoutError> {
        let usernames = sanitize_usernames(&usernames);
        if usernames.is_empty() {
            return Err(ScoutError::EmptyUsernames);
        }

        tracing::info!(
            "Fetching {} profiles ({} max in flight)",
            usernames.len(),
            self.pool.capacity()
        );
        let start = Instant::now();

        let fetcher = self.fetcher.clone();
        let records = run_fetches(usernames, &self.pool, move |username| {
            let fetcher = fetcher.clone();
            async move { fetcher.fetch(&username).await }
        })
        .await;

        let ok = records.iter().filter(|record| record.is_ok()).count();
        tracing::info!(
            "Completed {} fetches in {:?} ({} ok, {} failed)",
            records.len(),
            start.elapsed(),
            ok,
            records.len() - ok
        );

        Ok(ScrapeOutput::new(records))
    }
}
