use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use profile_scout::config::load_config;
///
/// let config = load_config(Path::new("config.toml")).unwrap();
/// println!("Endpoint: {}", config.endpoint.base_url);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[fetch]
max-concurrent = 5
connect-timeout-secs = 2
read-timeout-secs = 4
total-timeout-secs = 10

[endpoint]
base-url = "https://example.com"
app-id = "12345"

[output]
results-path = "./out.json"

[input]
usernames = ["alice", "bob"]

[proxy]
urls = ["http://proxy.example.com:8080"]
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.fetch.max_concurrent, 5);
        assert_eq!(config.fetch.total_timeout_secs, 10);
        assert_eq!(config.endpoint.base_url, "https://example.com");
        assert_eq!(config.input.usernames, vec!["alice", "bob"]);
        assert_eq!(config.proxy.urls.len(), 1);
    }

    #[test]
    fn test_defaults_from_empty_document() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.fetch.max_concurrent, 10);
        assert_eq!(config.fetch.connect_timeout_secs, 4);
        assert_eq!(config.fetch.read_timeout_secs, 8);
        assert_eq!(config.fetch.total_timeout_secs, 15);
        assert_eq!(config.endpoint.base_url, "https://i.instagram.com");
        assert_eq!(config.endpoint.app_id, "936619743392459");
        assert!(config.input.usernames.is_empty());
        assert!(config.proxy.urls.is_empty());
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let config_content = "this is not valid TOML {{{";
        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[fetch]
connect-timeout-secs = 20
read-timeout-secs = 8
total-timeout-secs = 15
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_negative_max_concurrent_is_accepted() {
        // The floor to 1 is applied at the fetch pool, not here.
        let config_content = r#"
[fetch]
max-concurrent = -3
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.fetch.max_concurrent, -3);
    }
}
