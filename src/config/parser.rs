use std::path::Path;

use url::Url;

use crate::config::types::Config;
use crate::{ConfigError, ConfigResult};

/// Loads and validates a configuration file
///
/// # Errors
///
/// * [`ConfigError::Io`] when the file cannot be read
/// * [`ConfigError::Parse`] when it is not valid TOML
/// * [`ConfigError::Validation`] / [`ConfigError::InvalidUrl`] when a value
///   is out of range
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

/// Validates configuration values
pub fn validate(config: &Config) -> ConfigResult<()> {
    let scraper = &config.scraper;

    if scraper.pages < 1 {
        return Err(ConfigError::Validation(format!(
            "pages must be at least 1, got {}",
            scraper.pages
        )));
    }

    if scraper.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent must not be empty".to_owned(),
        ));
    }

    let url = Url::parse(&scraper.dealership_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("{}: {e}", scraper.dealership_url)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "only http and https are supported, got: {}",
            scraper.dealership_url
        )));
    }

    Ok(())
}
