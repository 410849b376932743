//! Runtime settings for the REST client and the page server.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_SERVER_BASE_PATH: &str = "http://localhost:8080/api";
pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Settings shared by every [`crate::client::RestClient`] built from them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base path of the backend REST API, e.g. `https://billing.example.com/api`.
    pub server_base_path: String,
    /// Extra attempts after the first failed one.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn new(server_base_path: impl Into<String>) -> Self {
        ClientConfig {
            server_base_path: server_base_path.into(),
            max_retries: DEFAULT_MAX_RETRIES,
            timeout_secs: None,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::new(DEFAULT_SERVER_BASE_PATH)
    }
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub max_body_bytes: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub server: ServerConfig,
}
