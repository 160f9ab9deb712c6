//! Application configuration stored as TOML in the `.placedesk` root.
//!
//! Settings are small enough to live in one file: the prediction service
//! base URL and startup behavior. A missing file yields defaults; the
//! `PLACEDESK_API_BASE` environment variable overrides the stored base URL.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the configured service base URL.
pub const API_BASE_ENV: &str = "PLACEDESK_API_BASE";

const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Persisted application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the prediction service.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Probe `GET /health` once when the app starts.
    #[serde(default = "default_true")]
    pub check_service_on_startup: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            check_service_on_startup: true,
        }
    }
}

/// Errors that can occur while loading or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The application directory could not be prepared.
    #[error(transparent)]
    AppDir(#[from] app_dirs::AppDirError),
    /// Failed to read the config file.
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write config at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file is not valid TOML for the expected shape.
    #[error("Failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// The settings could not be serialized to TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Resolve the configuration file path, ensuring the app directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, returning defaults if the file is missing.
///
/// The `PLACEDESK_API_BASE` environment variable, when set and non-empty,
/// takes precedence over the stored base URL.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let mut config = load_from(&config_path()?)?;
    override_api_base(&mut config, std::env::var(API_BASE_ENV).ok());
    config.api_base = normalized_api_base(&config.api_base);
    Ok(config)
}

/// Persist the configuration to the app directory.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    save_to(&config_path()?, config)
}

fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn save_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    let text = toml::to_string_pretty(config)?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn override_api_base(config: &mut AppConfig, env_value: Option<String>) {
    if let Some(value) = env_value {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            config.api_base = trimmed.to_string();
        }
    }
}

/// Strip trailing slashes so endpoint paths can be appended uniformly.
fn normalized_api_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        trimmed.to_string()
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_true() -> bool {
    true
}
