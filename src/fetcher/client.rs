//! HTTP client construction
//!
//! One client is built per fetch: the proxy is client-level state in
//! reqwest, and each fetch may go through a different proxy URL.

use crate::config::FetchConfig;
use reqwest::{redirect::Policy, Client, Proxy};
use std::time::Duration;

/// The three timeout budgets applied to every request
///
/// Whichever budget fires first determines the failure classification.
#[derive(Debug, Clone, Copy)]
pub struct FetchTimeouts {
    /// Budget for establishing a connection
    pub connect: Duration,
    /// Budget for reading a response
    pub read: Duration,
    /// Overall ceiling for one whole request
    pub total: Duration,
}

impl FetchTimeouts {
    /// Builds the timeout set from validated fetch configuration
    pub fn from_config(config: &FetchConfig) -> Self {
        Self {
            connect: Duration::from_secs(config.connect_timeout_secs),
            read: Duration::from_secs(config.read_timeout_secs),
            total: Duration::from_secs(config.total_timeout_secs),
        }
    }
}

/// Builds an HTTP client for a single fetch
///
/// No cookie store, no redirect following: a 3xx from the endpoint surfaces
/// as a non-200 result rather than being chased.
///
/// # Arguments
///
/// * `timeouts` - The connect/read/total budgets
/// * `proxy_url` - Proxy to route through, or `None` for a direct connection
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - The proxy URL was rejected or the client failed to build
pub fn build_http_client(
    timeouts: &FetchTimeouts,
    proxy_url: Option<&str>,
) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .connect_timeout(timeouts.connect)
        .read_timeout(timeouts.read)
        .timeout(timeouts.total)
        .redirect(Policy::none())
        .gzip(true)
        .brotli(true);

    if let Some(proxy) = proxy_url {
        builder = builder.proxy(Proxy::all(proxy)?);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_timeouts() -> FetchTimeouts {
        FetchTimeouts {
            connect: Duration::from_secs(4),
            read: Duration::from_secs(8),
            total: Duration::from_secs(15),
        }
    }

    #[test]
    fn test_build_direct_client() {
        assert!(build_http_client(&test_timeouts(), None).is_ok());
    }

    #[test]
    fn test_build_client_with_proxy() {
        let client = build_http_client(&test_timeouts(), Some("http://proxy.example.com:8080"));
        assert!(client.is_ok());
    }

    #[test]
    fn test_build_client_with_bad_proxy() {
        let client = build_http_client(&test_timeouts(), Some("not a proxy url"));
        assert!(client.is_err());
    }

    #[test]
    fn test_timeouts_from_config() {
        let timeouts = FetchTimeouts::from_config(&FetchConfig::default());
        assert_eq!(timeouts.connect, Duration::from_secs(4));
        assert_eq!(timeouts.read, Duration::from_secs(8));
        assert_eq!(timeouts.total, Duration::from_secs(15));
    }
}
