//! Settings file support for the tracker CLI.
//!
//! Settings are loaded from `$XDG_CONFIG_HOME/tracker/config.toml`. The core
//! calculations never read them; they only supply defaults for CLI flags.

use crate::{BodyParameters, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub body: BodyConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default body parameters used when flags are omitted
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct BodyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_m: Option<f64>,
}

/// Logging configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".into()
}

impl Settings {
    /// Load settings from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load settings from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(settings)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|| PathBuf::from("."))
        });
        base.join("tracker").join("config.toml")
    }

    /// Save the settings to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Resolve body parameters, preferring explicit values over settings
    pub fn body_parameters(
        &self,
        weight_kg: Option<f64>,
        height_m: Option<f64>,
    ) -> Result<BodyParameters> {
        let weight_kg = weight_kg.or(self.body.weight_kg).ok_or_else(|| {
            Error::Config("weight not given and no body.weight_kg in config".into())
        })?;
        let height_m = height_m.or(self.body.height_m).ok_or_else(|| {
            Error::Config("height not given and no body.height_m in config".into())
        })?;
        Ok(BodyParameters::new(weight_kg, height_m))
    }
}
