//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the user's config
//! directory and covers the portfolio API base URL and the request timeout.
//! The `FOLIO_API_URL` environment variable overrides the configured base
//! URL without touching the file.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Default portfolio API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://portfolio-backend-1-cb82.onrender.com";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the portfolio API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "folio")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
            .unwrap_or_else(|| PathBuf::from(".folio-config.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            FolioError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                FolioError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            FolioError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        Ok(())
    }

    /// Effective API base URL: `FOLIO_API_URL` wins over the config file
    pub fn api_base_url(&self) -> String {
        env::var("FOLIO_API_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| self.api_base_url.clone())
    }

    /// Request timeout as a duration
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout)
    }

    /// Get a configuration value by dotted key (for `folio config get`)
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "api.base_url" => Ok(self.api_base_url.clone()),
            "api.timeout" => Ok(self.request_timeout.to_string()),
            _ => Err(FolioError::Config(format!(
                "unknown config key '{key}'. Valid keys: api.base_url, api.timeout"
            ))),
        }
    }

    /// Set a configuration value by dotted key (for `folio config set`)
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.base_url" => {
                let trimmed = value.trim_end_matches('/');
                if trimmed.is_empty() {
                    return Err(FolioError::Config("api.base_url cannot be empty".to_string()));
                }
                self.api_base_url = trimmed.to_string();
                Ok(())
            }
            "api.timeout" => {
                let seconds: u64 = value.parse().map_err(|_| {
                    FolioError::Config(format!("invalid timeout '{value}': expected seconds"))
                })?;
                self.request_timeout = seconds;
                Ok(())
            }
            _ => Err(FolioError::Config(format!(
                "unknown config key '{key}'. Valid keys: api.base_url, api.timeout"
            ))),
        }
    }
}
