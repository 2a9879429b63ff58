//! Configuration loading.
//!
//! Configuration is read from TOML. Search order:
//! 1. `./user-card.toml`
//! 2. `<config dir>/user-card/config.toml` (e.g. `~/.config/user-card/config.toml`)
//!
//! Every key is optional:
//!
//! ```toml
//! base_url = "https://jsonplaceholder.typicode.com"
//! request_timeout_secs = 10
//! initial_id = 1
//! empty_input = "retain"   # or "clear"
//! channel_capacity = 32
//! ```
//!
//! `USER_CARD_BASE_URL` overrides `base_url`.

use std::path::{Path, PathBuf};
use std::time::Duration;
use serde::Deserialize;
use thiserror::Error;
use url::Url;
use crate::domain::{EmptyInputPolicy, Identifier};

const LOCAL_CONFIG_NAME: &str = "user-card.toml";
const XDG_CONFIG_NAME: &str = "config.toml";
const APP_NAME: &str = "user-card";

pub const BASE_URL_ENV: &str = "USER_CARD_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read '{path}': {reason}")]
    Read { path: String, reason: String },
    #[error("Invalid configuration: {0}")]
    Parse(String),
    #[error("Invalid base_url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("Invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Root of the user-record service; records live at `<base_url>/users/{id}`.
    pub base_url: String,
    pub request_timeout_secs: u64,
    /// Record loaded at start-up, before any input.
    pub initial_id: Identifier,
    pub empty_input: EmptyInputPolicy,
    pub channel_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 10,
            initial_id: Identifier::DEFAULT,
            empty_input: EmptyInputPolicy::default(),
            channel_capacity: 32,
        }
    }
}

impl AppConfig {
    /// Parses and checks `base_url`.
    pub fn service_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: format!("unsupported scheme '{other}'"),
            }),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Replaces `base_url` when an override is present and non-blank.
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|url| !url.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.service_url()?;
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "channel_capacity",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Loads configuration from the first file in [`search_paths`], applies the
/// environment override and validates the result. Defaults apply when no
/// file exists.
pub fn load() -> Result<AppConfig, ConfigError> {
    let config = match search_paths().into_iter().find(|path| path.exists()) {
        Some(path) => from_path(&path)?,
        None => AppConfig::default(),
    };
    let config = config.with_base_url_override(std::env::var(BASE_URL_ENV).ok());
    config.validate()?;
    Ok(config)
}

/// Paths searched for a configuration file, in order.
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(APP_NAME).join(XDG_CONFIG_NAME));
    }
    paths
}

pub fn from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    from_str(&contents)
}

pub fn from_str(toml_str: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
}
