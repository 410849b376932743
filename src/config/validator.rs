//! Config validation: base path must be an absolute http(s) URL.

use crate::config::{AppConfig, ClientConfig};
use crate::error::ConfigError;
use url::Url;

/// Retries above this are almost certainly a typo; every attempt is issued back to back.
pub const MAX_RETRIES_LIMIT: u32 = 10;

pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    validate_client(&config.client)?;
    if config.server.max_body_bytes == 0 {
        return Err(ConfigError::Validation("max body size must be greater than zero".into()));
    }
    Ok(())
}

pub fn validate_client(config: &ClientConfig) -> Result<(), ConfigError> {
    parse_base_path(&config.server_base_path)?;
    if config.max_retries > MAX_RETRIES_LIMIT {
        return Err(ConfigError::Validation(format!(
            "max retries {} exceeds limit {}",
            config.max_retries, MAX_RETRIES_LIMIT
        )));
    }
    if config.timeout_secs == Some(0) {
        return Err(ConfigError::Validation("timeout must be greater than zero".into()));
    }
    Ok(())
}

/// Parse the server base path. Query strings and fragments are rejected since
/// resource segments are appended to the path.
pub fn parse_base_path(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBasePath {
        value: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".into()));
    }
    Ok(url)
}
