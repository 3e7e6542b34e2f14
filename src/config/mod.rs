//! Client configuration.
//!
//! [`ClientConfig`] controls the transport built by
//! [`SimpleHttpClient::with_config`](crate::http::SimpleHttpClient::with_config).
//! It can be built in code, or loaded with [`load_configuration`] from the
//! embedded defaults, an optional TOML file and `SIMPLE_HTTP__*` environment
//! variables.

mod loader;

pub use loader::{get_default_config, load_configuration, write_config_to};

use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "simple-http-client/0.1";

/// Settings for the underlying HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Total time allowed for a single request, in seconds.
    pub timeout_secs: u64,
    /// Time allowed to establish a connection, in seconds.
    pub connect_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
