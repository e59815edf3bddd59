use reqwest::Url;
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
    /// Uses `~/.config/folio/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Directory holding `config.toml` and the log file.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
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
    /// - Every animation interval is non-zero
    /// - Deleting is faster than typing
    /// - The contact endpoint, if any, is an http(s) URL
    /// - The contact timeout is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let animation = &self.animation;
        let intervals = [
            ("type_ms", animation.type_ms),
            ("delete_ms", animation.delete_ms),
            ("pause_after_type_ms", animation.pause_after_type_ms),
            ("pause_after_delete_ms", animation.pause_after_delete_ms),
        ];
        if let Some((name, _)) = intervals.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::ValidationError {
                message: format!("animation.{} must be greater than zero", name),
            });
        }

        if animation.delete_ms >= animation.type_ms {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "animation.delete_ms ({}) must be less than animation.type_ms ({})",
                    animation.delete_ms, animation.type_ms
                ),
            });
        }

        if let Some(endpoint) = &self.contact.endpoint {
            let is_http = Url::parse(endpoint)
                .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
                .unwrap_or(false);
            if !is_http {
                return Err(ConfigError::ValidationError {
                    message: format!("contact.endpoint '{}' is not an http(s) URL", endpoint),
                });
            }
        }

        if self.contact.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "contact.timeout_seconds must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
