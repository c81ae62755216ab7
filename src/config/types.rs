use serde::Deserialize;

/// Main configuration structure for Profile-Scout
///
/// Every section is optional; missing sections and fields fall back to the
/// defaults below, so an empty TOML document is a valid configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub endpoint: EndpointConfig,
    pub output: OutputConfig,
    pub input: InputConfig,
    pub proxy: ProxyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            endpoint: EndpointConfig::default(),
            output: OutputConfig::default(),
            input: InputConfig::default(),
            proxy: ProxyConfig::default(),
        }
    }
}

/// Fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Maximum number of concurrent profile fetches
    ///
    /// Zero or negative values are floored to 1 at the fetch pool rather
    /// than rejected at validation time.
    #[serde(rename = "max-concurrent")]
    pub max_concurrent: i64,

    /// Budget for establishing a connection (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Budget for reading a response (seconds)
    #[serde(rename = "read-timeout-secs")]
    pub read_timeout_secs: u64,

    /// Overall ceiling for one whole request (seconds)
    #[serde(rename = "total-timeout-secs")]
    pub total_timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_concurrent: 10,
            connect_timeout_secs: 4,
            read_timeout_secs: 8,
            total_timeout_secs: 15,
        }
    }
}

/// Remote endpoint configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base URL of the profile API host
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Application id sent as the `x-ig-app-id` header on every request
    #[serde(rename = "app-id")]
    pub app_id: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "https://i.instagram.com".to_string(),
            app_id: "936619743392459".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path the JSON results payload is written to
    #[serde(rename = "results-path")]
    pub results_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: "./results.json".to_string(),
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Usernames to fetch, in output order
    pub usernames: Vec<String>,
}

/// Proxy rotation configuration
///
/// An empty list means every request connects directly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Proxy URLs rotated across requests
    pub urls: Vec<String>,
}
