#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Omni RPC Configuration
//!
//! This crate provides configuration management for omni-rpc clients.
//! It handles loading, saving, and overriding configuration that specifies:
//! - The Omni Core RPC endpoint and its credentials
//! - An optional per-call timeout
//! - Logging configuration
//!
//! Configuration is stored in TOML format and can be loaded from files,
//! overridden from `OMNI_RPC_*` environment variables, or created with
//! defaults pointing at a local mainnet node. Values are passed through
//! as given; nothing here checks that the URL or credentials work.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the configuration file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Omni Core RPC connection settings
    pub rpc: RpcConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection settings for the Omni Core JSON-RPC endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcConfig {
    /// Endpoint URL, e.g. `http://127.0.0.1:8332`
    pub url: String,
    /// Username for HTTP Basic authentication
    #[serde(default)]
    pub username: String,
    /// Password for HTTP Basic authentication
    #[serde(default)]
    pub password: String,
    /// Bitcoin-style `.cookie` file; takes precedence over username/password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_file: Option<PathBuf>,
    /// Per-call timeout in seconds; calls wait indefinitely when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8332".to_string(),
            username: String::new(),
            password: String::new(),
            cookie_file: None,
            timeout_secs: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: "info".to_string() } }
}

impl RpcConfig {
    /// The configured timeout as a [`Duration`]
    pub fn timeout(&self) -> Option<Duration> { self.timeout_secs.map(Duration::from_secs) }

    /// Override fields from environment variables.
    ///
    /// Recognized variables: `OMNI_RPC_URL`, `OMNI_RPC_USER`,
    /// `OMNI_RPC_PASSWORD`, `OMNI_RPC_COOKIE`, `OMNI_RPC_TIMEOUT_SECS`.
    /// Unset variables leave the field as is; an unparsable timeout is ignored.
    pub fn apply_env(&mut self) { self.apply_env_internal(|key| std::env::var(key).ok()) }

    /// Internal function for testing - allows injection of environment values
    fn apply_env_internal(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("OMNI_RPC_URL") {
            self.url = url;
        }
        if let Some(user) = var("OMNI_RPC_USER") {
            self.username = user;
        }
        if let Some(password) = var("OMNI_RPC_PASSWORD") {
            self.password = password;
        }
        if let Some(cookie) = var("OMNI_RPC_COOKIE") {
            self.cookie_file = Some(PathBuf::from(cookie));
        }
        if let Some(secs) = var("OMNI_RPC_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
            self.timeout_secs = Some(secs);
        }
    }
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/omni-rpc/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir =
            dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("omni-rpc");
        Ok(config_dir.join("config.toml"))
    }
}
