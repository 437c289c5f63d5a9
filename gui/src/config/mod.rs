// GUI configuration module
pub mod theme; // Palettes and the static style table for the top bar

use serde::Deserialize;
use shared::models::Urls;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

use theme::Theme;

/// Environment variable naming a JSON file that replaces the embedded default.
pub const CONFIG_ENV_VAR: &str = "DATA_MANAGER_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

// Mirrors the structure of assets/config/default.json
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    /// Origin of the server hosting the data manager; relative `urls` resolve against it.
    pub base_url: Url,
    pub urls: Urls,
    #[serde(default)]
    pub features: FeatureFlags,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct FeatureFlags {
    /// Shows the "ArcGIS Publisher" button in the top bar.
    #[serde(default)]
    pub arcgis_publisher: bool,
}

impl AppConfig {
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_str = include_str!("../../assets/config/default.json"); // Path relative to this .rs file
        Self::from_json(config_str)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&config_str)
    }

    pub fn from_json(config_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(config_str)?)
    }

    /// Loads the file named by `DATA_MANAGER_CONFIG`, or the embedded default when unset.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                tracing::info!("Loading configuration from {}", Path::new(&path).display());
                Self::load_from(path)
            }
            None => Self::load_default(),
        }
    }
}
