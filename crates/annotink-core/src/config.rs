//! Store behaviour configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// What happens to the primary shape when it is removed from the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LastShapePolicy {
    /// Keep pointing at the removed shape.
    #[default]
    Retain,
    /// Fall back to the most recently selected remaining shape.
    Repair,
}

/// Behaviour switches for [`crate::SelectionConfigStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Primary shape handling on removal.
    pub last_shape_policy: LastShapePolicy,
}

impl StoreConfig {
    /// Parse configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded store config from {}", path.display());
        Ok(config)
    }

    /// Default config file location.
    ///
    /// On Unix: `~/.config/annotink/store.json`
    /// On Windows: `%APPDATA%\annotink\store.json`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .map(|base| base.join("annotink").join("store.json"))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_default() -> ConfigResult<Self> {
        match Self::default_path() {
            Some(path) => Self::load_or_default(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load `path` if it exists, otherwise return the defaults.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("No store config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}
