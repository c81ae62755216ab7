//! Proxy provider seam
//!
//! The fetcher treats the proxy source as an opaque collaborator with one
//! operation: produce the connection URL for the next request. It is called
//! at most once per fetch and is shared read-only across all concurrent
//! fetches.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Supplies connection URLs for outbound requests
pub trait ProxyProvider: Send + Sync {
    /// Produces the connection URL to use for the next request
    ///
    /// Returns `None` for a direct connection.
    fn next_url(&self) -> Option<String>;
}

/// Rotates through a fixed list of proxy URLs
///
/// The cursor is atomic so the provider can be shared across concurrent
/// fetches without locking; each caller gets the next URL in list order,
/// wrapping around at the end.
pub struct RoundRobinProxies {
    urls: Vec<String>,
    cursor: AtomicUsize,
}

impl RoundRobinProxies {
    /// Creates a provider over the given URL list
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Creates a provider from a configured list, or `None` when the list is
    /// empty (direct connections)
    pub fn from_urls(urls: &[String]) -> Option<Self> {
        if urls.is_empty() {
            None
        } else {
            Some(Self::new(urls.to_vec()))
        }
    }

    /// Number of URLs in the rotation
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Whether the rotation is empty
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl ProxyProvider for RoundRobinProxies {
    fn next_url(&self) -> Option<String> {
        if self.urls.is_empty() {
            return None;
        }

        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.urls.len();
        Some(self.urls[index].clone())
    }
}
