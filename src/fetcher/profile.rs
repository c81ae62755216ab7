//! Single-request profile fetching
//!
//! This module owns the request/response cycle for one username: resolve a
//! proxy URL, issue the GET, and classify whatever comes back. Every outcome
//! becomes a record; nothing is raised past this layer and nothing is
//! retried.

use crate::config::EndpointConfig;
use crate::fetcher::client::{build_http_client, FetchTimeouts};
use crate::fetcher::record::{upstream_error, FetchFailure, ProfileRecord};
use crate::proxy::ProxyProvider;
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;

/// Header carrying the application id on every request
const APP_ID_HEADER: &str = "x-ig-app-id";

/// Fetches one profile per call, normalizing every outcome into a record
pub struct ProfileFetcher {
    base_url: String,
    app_id: String,
    timeouts: FetchTimeouts,
    proxies: Option<Arc<dyn ProxyProvider>>,
}

impl ProfileFetcher {
    /// Creates a fetcher for the given endpoint
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Validated endpoint configuration
    /// * `timeouts` - The connect/read/total budgets for every request
    /// * `proxies` - Proxy provider, or `None` for direct connections
    pub fn new(
        endpoint: &EndpointConfig,
        timeouts: FetchTimeouts,
        proxies: Option<Arc<dyn ProxyProvider>>,
    ) -> Self {
        Self {
            base_url: endpoint.base_url.trim_end_matches('/').to_string(),
            app_id: endpoint.app_id.clone(),
            timeouts,
            proxies,
        }
    }

    /// The profile endpoint URL for a username
    fn profile_url(&self, username: &str) -> String {
        format!(
            "{}/api/v1/users/web_profile_info/?username={}",
            self.base_url, username
        )
    }

    /// Fetches profile details for a single username
    ///
    /// The proxy provider is consulted at most once, before the attempt. The
    /// outcome is always a record: success, or a failure classified into the
    /// closed [`FetchFailure`] set.
    pub async fn fetch(&self, username: &str) -> ProfileRecord {
        let proxy_url = self.proxies.as_ref().and_then(|provider| provider.next_url());

        tracing::debug!(
            "Fetching profile for {} via {}",
            username,
            proxy_url.as_deref().unwrap_or("direct connection")
        );

        let client = match build_http_client(&self.timeouts, proxy_url.as_deref()) {
            Ok(client) => client,
            Err(err) => {
                return ProfileRecord::failure(
                    username.to_string(),
                    FetchFailure::Transport(err.to_string()),
                    proxy_url,
                );
            }
        };

        let response = match client
            .get(self.profile_url(username))
            .header(APP_ID_HEADER, &self.app_id)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                return ProfileRecord::failure(
                    username.to_string(),
                    FetchFailure::from_transport(&err),
                    proxy_url,
                );
            }
        };

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return ProfileRecord::failure(
                username.to_string(),
                FetchFailure::Unauthorized,
                proxy_url,
            );
        }

        if status != StatusCode::OK {
            return ProfileRecord::failure(
                username.to_string(),
                FetchFailure::BadStatus(status.as_u16()),
                proxy_url,
            );
        }

        let payload: Value = match response.json().await {
            Ok(payload) => payload,
            Err(err) if err.is_decode() => {
                return ProfileRecord::failure(
                    username.to_string(),
                    FetchFailure::InvalidPayload(err.to_string()),
                    proxy_url,
                );
            }
            Err(err) => {
                // A timeout while streaming the body is a transport failure,
                // not a malformed payload.
                return ProfileRecord::failure(
                    username.to_string(),
                    FetchFailure::from_transport(&err),
                    proxy_url,
                );
            }
        };

        if let Some((message, status_code)) = upstream_error(&payload) {
            return ProfileRecord::failure(
                username.to_string(),
                FetchFailure::Upstream {
                    message,
                    status_code,
                },
                proxy_url,
            );
        }

        ProfileRecord::success(username.to_string(), payload, proxy_url)
    }
}
