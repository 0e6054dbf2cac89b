//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::APP_BINARY_NAME;
use crate::keycode_db::KeyboardRegion;

/// Output settings for generated documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print the generated JSON
    pub pretty: bool,
    /// Directory for generated files when no output path is given
    pub directory: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            directory: None,
        }
    }
}

impl OutputConfig {
    /// Returns the default output file for `input`, if an output directory is set.
    ///
    /// The file is named after the input's stem, e.g. `board.txt` becomes `<dir>/board.json`.
    #[must_use]
    pub fn output_path_for(&self, input: &Path) -> Option<PathBuf> {
        let directory = self.directory.as_ref()?;
        let stem = input.file_stem()?;
        Some(directory.join(stem).with_extension("json"))
    }
}

/// Defaults applied to definitions that leave a setting out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Region code used when a definition has no `keyboard` attribute (e.g. "de-ch")
    pub keyboard: Option<String>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/nohboard-gen/config.toml`
/// - macOS: `~/Library/Application Support/nohboard-gen/config.toml`
/// - Windows: `%APPDATA%\nohboard-gen\config.toml`
///
/// # Validation
///
/// - `defaults.keyboard` must be a supported region code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,
    /// Definition defaults
    pub defaults: DefaultsConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_BINARY_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the user's config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = path.parent() {
            fs::create_dir_all(config_dir).with_context(|| {
                format!("Failed to create config directory: {}", config_dir.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");
        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp config file to: {}", path.display()))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(code) = &self.defaults.keyboard {
            KeyboardRegion::from_code(code).context("Invalid defaults.keyboard")?;
        }
        Ok(())
    }

    /// Returns the configured default region.
    pub fn default_region(&self) -> Result<Option<KeyboardRegion>> {
        self.defaults
            .keyboard
            .as_deref()
            .map(KeyboardRegion::from_code)
            .transpose()
            .context("Invalid defaults.keyboard")
    }
}
