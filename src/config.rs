//! # Client Configuration
//!
//! Connection settings for a provisioning [`Client`](crate::Client): host,
//! credentials, and the per-request timeout. The struct derives
//! `Deserialize` so it can be embedded in a host application's own
//! configuration file, and [`ClientConfig::from_env`] resolves it from
//! `NEXTCLOUD_*` environment variables for tooling use.

use serde::Deserialize;

use crate::error::{ClientError, ClientResult};

fn default_timeout_ms() -> u64 {
    ClientConfig::DEFAULT_TIMEOUT_MS
}

/// Connection settings for a provisioning client.
///
/// Credentials are fixed once the client is constructed; there is no session
/// or token state, every request authenticates itself.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base address of the Nextcloud instance, e.g. `https://cloud.example.com`.
    /// The OCS path (`/ocs/v1.php`) is appended by the client.
    pub host: String,
    /// Admin account used for Basic authentication
    pub username: String,
    /// Secret for the admin account (password or app password)
    pub password: String,
    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl ClientConfig {
    /// Default per-request timeout (10 seconds).
    pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

    /// Create a config with the default timeout.
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            password: password.into(),
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
        }
    }

    /// Override the per-request timeout.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Resolve a config from `NEXTCLOUD_HOST`, `NEXTCLOUD_USERNAME`,
    /// `NEXTCLOUD_PASSWORD` and optionally `NEXTCLOUD_TIMEOUT_MS`.
    pub fn from_env() -> ClientResult<Self> {
        let host = require_env("NEXTCLOUD_HOST")?;
        let username = require_env("NEXTCLOUD_USERNAME")?;
        let password = require_env("NEXTCLOUD_PASSWORD")?;

        let timeout_ms = match std::env::var("NEXTCLOUD_TIMEOUT_MS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                ClientError::config_error(format!(
                    "NEXTCLOUD_TIMEOUT_MS must be an integer, got '{raw}'"
                ))
            })?,
            Err(_) => Self::DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            host,
            username,
            password,
            timeout_ms,
        })
    }
}

fn require_env(name: &str) -> ClientResult<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ClientError::config_error(format!("{name} is not set")))
}
