//! Configuration management for the lookup client.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides. The API key is never read from or
//! written to the config file; it only enters through the environment or
//! [`ClientConfig::with_api_key`].

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Root of the Have I Been Pwned v3 API.
pub const DEFAULT_BASE_URL: &str = "https://haveibeenpwned.com/api/v3/";

/// Environment variable holding the HIBP API key.
pub const API_KEY_ENV: &str = "HIBP_API_KEY";

const BASE_URL_ENV: &str = "BREACHWATCH_BASE_URL";
const USER_AGENT_ENV: &str = "BREACHWATCH_USER_AGENT";
const TIMEOUT_ENV: &str = "BREACHWATCH_TIMEOUT_SECS";

/// Settings the lookup client is constructed from.
///
/// Loaded from `~/.config/breachwatch/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// HIBP API key, sent as the `hibp-api-key` header
    #[serde(skip)]
    pub api_key: Option<String>,
    /// Service root every operation path is appended to
    pub base_url: String,
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("breachwatch/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
        }
    }
}

// Hand-written so the API key never ends up in logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file, falling back to defaults if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            let contents = fs::read_to_string(path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `HIBP_API_KEY`: API key sent with every request
    /// - `BREACHWATCH_BASE_URL`: Override the service root
    /// - `BREACHWATCH_USER_AGENT`: Override the `User-Agent` header
    /// - `BREACHWATCH_TIMEOUT_SECS`: Override the request timeout
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|val| !val.trim().is_empty());

        if let Some(key) = var(API_KEY_ENV) {
            self.api_key = Some(key.trim().to_string());
            tracing::debug!("API key loaded from {}", API_KEY_ENV);
        }

        if let Some(url) = var(BASE_URL_ENV) {
            tracing::debug!("Override base_url from env: {}", url);
            self.base_url = url;
        }

        if let Some(agent) = var(USER_AGENT_ENV) {
            tracing::debug!("Override user_agent from env: {}", agent);
            self.user_agent = agent;
        }

        if let Some(val) = var(TIMEOUT_ENV) {
            match val.trim().parse() {
                Ok(secs) => {
                    self.timeout_secs = secs;
                    tracing::debug!("Override timeout_secs from env: {}", secs);
                }
                Err(_) => tracing::debug!("Ignoring non-numeric {}: {}", TIMEOUT_ENV, val),
            }
        }
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist. The API key is not
    /// written.
    pub fn save(&self) -> ConfigResult<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        tracing::debug!("Saving config to {}", path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/breachwatch/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("com", "breachwatch", "breachwatch")
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Check that the configuration can back a working client.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] if the base URL does not parse or
    /// cannot carry path segments, the timeout is zero, or the user agent is
    /// blank.
    pub fn validate(&self) -> ConfigResult<()> {
        self.parsed_base_url()?;

        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "user_agent".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Parse [`Self::base_url`].
    pub fn parsed_base_url(&self) -> ConfigResult<Url> {
        let url = Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "base_url".to_string(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidValue {
                field: "base_url".to_string(),
                reason: format!("'{}' cannot carry path segments", self.base_url),
            });
        }

        Ok(url)
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the service root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}
