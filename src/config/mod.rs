//! Configuration module for qrdash
//!
//! Manages application configuration: where the house manual file lives and
//! where composed print documents are written. Configuration is stored in
//! the user's config directory.

mod setup;

pub use setup::first_time_setup;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct QrDashConfig {
    /// Path of the house manual JSON file
    #[serde(default)]
    pub manual_path: Option<PathBuf>,

    /// Directory where print documents are written
    #[serde(default)]
    pub print_dir: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl QrDashConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("qrdash").join("config.toml"))
    }

    /// Load configuration from file, creating a default one if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Load configuration, running first-time setup if no config exists yet
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }

    /// Resolve the manual file path, falling back to the data directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no path is configured and the system data
    /// directory cannot be determined.
    pub fn resolve_manual_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.manual_path {
            return Ok(path.clone());
        }
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;
        Ok(data_dir.join("qrdash").join("manual.json"))
    }

    /// Resolve the print output directory, falling back to the data directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no directory is configured and the system
    /// data directory cannot be determined.
    pub fn resolve_print_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.print_dir {
            return Ok(dir.clone());
        }
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;
        Ok(data_dir.join("qrdash").join("prints"))
    }
}
