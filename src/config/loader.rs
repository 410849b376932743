//! Load settings from the process environment (a `.env` file is honoured).

use crate::config::types::*;
use crate::config::validate;
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

pub const ENV_SERVER_BASE_PATH: &str = "SERVER_BASE_PATH";
pub const ENV_MAX_RETRIES: &str = "CLIENT_MAX_RETRIES";
pub const ENV_TIMEOUT_SECS: &str = "CLIENT_TIMEOUT_SECS";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_MAX_BODY_BYTES: &str = "MAX_BODY_BYTES";

/// Load config from the environment after reading `.env` if present.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_with(|key| std::env::var(key).ok())
}

/// Load config through an arbitrary key lookup. Missing keys fall back to defaults.
pub fn load_with<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let server_base_path = get(ENV_SERVER_BASE_PATH).unwrap_or_else(|| {
        tracing::warn!(
            "{} not set, falling back to {}",
            ENV_SERVER_BASE_PATH,
            DEFAULT_SERVER_BASE_PATH
        );
        DEFAULT_SERVER_BASE_PATH.to_string()
    });
    let max_retries = parse_or(ENV_MAX_RETRIES, get(ENV_MAX_RETRIES), DEFAULT_MAX_RETRIES)?;
    let timeout_secs = get(ENV_TIMEOUT_SECS)
        .map(|v| parse_setting::<u64>(ENV_TIMEOUT_SECS, v))
        .transpose()?;
    let bind_addr: SocketAddr = match get(ENV_BIND_ADDR) {
        Some(v) => parse_setting(ENV_BIND_ADDR, v)?,
        None => parse_setting(ENV_BIND_ADDR, DEFAULT_BIND_ADDR.to_string())?,
    };
    let max_body_bytes = parse_or(ENV_MAX_BODY_BYTES, get(ENV_MAX_BODY_BYTES), DEFAULT_MAX_BODY_BYTES)?;

    let config = AppConfig {
        client: ClientConfig {
            server_base_path,
            max_retries,
            timeout_secs,
        },
        server: ServerConfig {
            bind_addr,
            max_body_bytes,
        },
    };
    validate(&config)?;
    Ok(config)
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(v) => parse_setting(key, v),
        None => Ok(default),
    }
}

fn parse_setting<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidSetting { key, value })
}
