//! Configuration file support for paintkit.
//!
//! Settings for the render-capture harness are read from
//! `~/.config/paintkit/config.toml`. If no config file exists, defaults are used.

pub mod types;

pub use types::CaptureConfig;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::capture::file::{expand_tilde, is_valid_template};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [capture]
/// output_directory = "~/snapshots"
/// filename_template = "shot_%H%M%S"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, schemars::JsonSchema)]
pub struct Config {
    /// Render-capture harness settings
    #[serde(default)]
    pub capture: CaptureConfig,
}

impl Config {
    /// Validates user-provided values, replacing unusable ones and logging a warning.
    ///
    /// - `filename_template`: must not be blank and must only use known chrono specifiers
    /// - `output_directory`: `~/` is expanded
    fn validate_and_clamp(&mut self) {
        if self.capture.filename_template.trim().is_empty() {
            log::warn!("Empty filename_template, falling back to the default template");
            self.capture.filename_template = types::default_filename_template();
        } else if !is_valid_template(&self.capture.filename_template) {
            log::warn!(
                "Invalid filename_template '{}', falling back to the default template",
                self.capture.filename_template
            );
            self.capture.filename_template = types::default_filename_template();
        }

        if let Some(raw) = self.capture.output_directory.to_str()
            && raw.starts_with("~/")
        {
            self.capture.output_directory = expand_tilde(raw);
        }
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(source).context("Failed to parse config")?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("paintkit");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or is not valid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Serializes the configuration to TOML at `config_path`, creating parent
    /// directories as needed.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }
}
