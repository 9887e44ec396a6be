use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/anysettings/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("anysettings").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is http(s)
    /// - Endpoint paths are absolute
    /// - Timeouts are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let server = &self.server;
        if !(server.base_url.starts_with("http://") || server.base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "server.base_url must start with http:// or https:// (got '{}')",
                    server.base_url
                ),
            });
        }

        for (name, path) in [
            ("settings_path", &server.settings_path),
            ("update_path", &server.update_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::ValidationError {
                    message: format!("server.{} must start with '/' (got '{}')", name, path),
                });
            }
        }

        if server.timeout_seconds == 0 || server.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "server timeouts must be greater than zero".to_string(),
            });
        }

        if self.auth.header_name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "auth.header_name must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
