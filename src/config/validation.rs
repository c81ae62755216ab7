use crate::config::types::{Config, EndpointConfig, FetchConfig, OutputConfig, ProxyConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_endpoint_config(&config.endpoint)?;
    validate_output_config(&config.output)?;
    validate_proxy_config(&config.proxy)?;
    Ok(())
}

/// Validates fetch configuration
///
/// The timeout budgets must be positive and ordered connect <= read <= total.
/// The concurrency cap is deliberately not validated here: zero or negative
/// values are floored to 1 by the fetch pool.
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.connect_timeout_secs == 0
        || config.read_timeout_secs == 0
        || config.total_timeout_secs == 0
    {
        return Err(ConfigError::Validation(
            "timeout budgets must be greater than zero".to_string(),
        ));
    }

    if config.connect_timeout_secs > config.read_timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs ({}) must not exceed read-timeout-secs ({})",
            config.connect_timeout_secs, config.read_timeout_secs
        )));
    }

    if config.read_timeout_secs > config.total_timeout_secs {
        return Err(ConfigError::Validation(format!(
            "read-timeout-secs ({}) must not exceed total-timeout-secs ({})",
            config.read_timeout_secs, config.total_timeout_secs
        )));
    }

    Ok(())
}

/// Validates endpoint configuration
fn validate_endpoint_config(config: &EndpointConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.app_id.is_empty() {
        return Err(ConfigError::Validation(
            "app-id cannot be empty".to_string(),
        ));
    }

    // The app id travels as a header value.
    if !config.app_id.chars().all(|c| c.is_ascii_graphic()) {
        return Err(ConfigError::Validation(format!(
            "app-id must be printable ASCII, got '{}'",
            config.app_id
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.results_path.is_empty() {
        return Err(ConfigError::Validation(
            "results-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates proxy configuration
fn validate_proxy_config(config: &ProxyConfig) -> Result<(), ConfigError> {
    for url in &config.urls {
        Url::parse(url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid proxy URL '{}': {}", url, e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.fetch.read_timeout_secs = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_timeout_ordering_enforced() {
        let mut config = Config::default();
        config.fetch.connect_timeout_secs = 10;
        config.fetch.read_timeout_secs = 8;
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.fetch.read_timeout_secs = 20;
        config.fetch.total_timeout_secs = 15;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let mut config = Config::default();
        config.endpoint.base_url = "not a url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));

        let mut config = Config::default();
        config.endpoint.base_url = "ftp://example.com".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_app_id_rejected() {
        let mut config = Config::default();
        config.endpoint.app_id = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_bad_proxy_url_rejected() {
        let mut config = Config::default();
        config.proxy.urls = vec!["http://good.example.com:8080".to_string(), "???".to_string()];
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_http_base_url_allowed() {
        let mut config = Config::default();
        config.endpoint.base_url = "http://127.0.0.1:8080".to_string();
        assert!(validate(&config).is_ok());
    }
}
