//! Client configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AdminError, AdminResult};

/// Environment variable overriding [`ClientConfig::base_url`].
pub const BASE_URL_ENV: &str = "KEYCLOAK_BASE_URL";

/// Environment variable overriding [`ClientConfig::timeout_secs`].
pub const TIMEOUT_ENV: &str = "KEYCLOAK_TIMEOUT_SECS";

/// Admin client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server base URL, including any context path (e.g., `http://localhost:8080/auth`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout for the bundled reqwest transport. `None` keeps the
    /// transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// `User-Agent` header for the bundled reqwest transport.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Default server URL.
fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_user_agent() -> String {
    concat!("kc-admin-client/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration pointing at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the transport timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Loads configuration from the default file, then applies environment
    /// overrides. A missing file yields the defaults.
    pub fn load() -> AdminResult<Self> {
        let path = Self::config_path()?;
        let config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };
        config.with_env_overrides()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> AdminResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AdminError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        toml::from_str(&content)
            .map_err(|e| AdminError::Config(format!("failed to parse config: {e}")))
    }

    /// Applies `KEYCLOAK_BASE_URL` and `KEYCLOAK_TIMEOUT_SECS`.
    pub fn with_env_overrides(self) -> AdminResult<Self> {
        self.with_overrides(
            std::env::var(BASE_URL_ENV).ok(),
            std::env::var(TIMEOUT_ENV).ok(),
        )
    }

    fn with_overrides(
        mut self,
        base_url: Option<String>,
        timeout: Option<String>,
    ) -> AdminResult<Self> {
        if let Some(url) = base_url.filter(|u| !u.is_empty()) {
            self.base_url = url;
        }
        if let Some(raw) = timeout.filter(|t| !t.is_empty()) {
            let secs = raw.parse::<u64>().map_err(|e| {
                AdminError::Config(format!("invalid {TIMEOUT_ENV} '{raw}': {e}"))
            })?;
            self.timeout_secs = Some(secs);
        }
        Ok(self)
    }

    /// Gets the default configuration file path.
    pub fn config_path() -> AdminResult<PathBuf> {
        let home = dirs_next::home_dir()
            .ok_or_else(|| AdminError::Config("could not determine home directory".to_string()))?;
        Ok(home.join(".keycloak").join("admin-client.toml"))
    }

    /// Returns the configured timeout.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Builds the reqwest transport described by this configuration.
    pub fn build_http_client(&self) -> AdminResult<reqwest::Client> {
        let mut builder = reqwest::Client::builder().user_agent(&self.user_agent);
        if let Some(timeout) = self.timeout() {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| AdminError::Transport(e.into()))
    }
}
