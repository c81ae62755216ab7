//! Concurrency-bounded fetch scheduling
//!
//! One task is spawned per username; a fixed-capacity semaphore caps how
//! many fetches are in flight at once. Results are bound to their input
//! position, so the output order matches the input order no matter how
//! completions interleave.

use crate::fetcher::record::{FetchFailure, ProfileRecord};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Bounded pool of fetch slots
///
/// The permit counter is the only state shared across fetches. Acquire
/// blocks until a slot frees up; the permit releases on every exit path
/// because it is held as a guard for the task's lifetime.
pub struct FetchPool {
    permits: Arc<Semaphore>,
    capacity: usize,
}

impl FetchPool {
    /// Creates a pool with the given concurrency cap
    ///
    /// Zero or negative caps are floored to 1; a zero-permit pool would
    /// stall every fetch forever.
    pub fn new(max_concurrent: i64) -> Self {
        let capacity = max_concurrent.max(1) as usize;
        Self {
            permits: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    /// The effective concurrency cap
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn permits(&self) -> Arc<Semaphore> {
        self.permits.clone()
    }
}

/// Runs one fetch per username under the pool's concurrency cap
///
/// Each task acquires a slot, runs the fetch, and releases the slot when it
/// finishes. Tasks are joined in spawn order, so the returned records line
/// up with the input list regardless of completion order. A task that dies
/// yields an uncategorized transport failure for its username rather than
/// dropping the entry, and never disturbs the other fetches.
///
/// # Arguments
///
/// * `usernames` - Sanitized usernames, one fetch each
/// * `pool` - The shared slot pool
/// * `fetch` - Produces the fetch future for one username
pub async fn run_fetches<F, Fut>(
    usernames: Vec<String>,
    pool: &FetchPool,
    fetch: F,
) -> Vec<ProfileRecord>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = ProfileRecord> + Send + 'static,
{
    let mut handles = Vec::with_capacity(usernames.len());

    for username in &usernames {
        let permits = pool.permits();
        // The future is inert until polled, so the permit acquired inside
        // the task gates the whole fetch, proxy resolution included.
        let fut = fetch(username.clone());
        handles.push(tokio::spawn(async move {
            let _permit = permits.acquire_owned().await.ok();
            fut.await
        }));
    }

    let mut records = Vec::with_capacity(usernames.len());
    for (username, handle) in usernames.into_iter().zip(handles) {
        match handle.await {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::error!("Fetch task for {} died: {}", username, err);
                records.push(ProfileRecord::failure(
                    username,
                    FetchFailure::Transport(err.to_string()),
                    None,
                ));
            }
        }
    }

    records
}
