//! Configuration management for the selectbox demo application
//!
//! This module handles loading, parsing, and validation of configuration files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_MODAL_TITLE, DEFAULT_PLACEHOLDER, LOG_FILE_DEFAULT, MODAL_DEFAULT_HEIGHT_PERCENT,
    MODAL_DEFAULT_WIDTH_PERCENT, MODAL_MAX_PERCENT, MODAL_MIN_PERCENT,
};
use crate::icons::IconTheme;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Text shown in the trigger field while nothing is selected
    pub placeholder: String,
    /// Title rendered at the top of the selection modal
    pub modal_title: String,
    /// Show the modal title row
    pub show_title: bool,
    /// Show the search bar inside the modal
    pub show_search_bar: bool,
    /// Modal width as a percentage of the terminal width
    pub modal_width_percent: u16,
    /// Modal height as a percentage of the terminal height
    pub modal_height_percent: u16,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DisplayConfig {
    /// Icon theme: "emoji", "unicode", or "ascii"
    pub icon_theme: IconTheme,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Log file path
    pub file: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            modal_title: DEFAULT_MODAL_TITLE.to_string(),
            show_title: true,
            show_search_bar: true,
            modal_width_percent: MODAL_DEFAULT_WIDTH_PERCENT,
            modal_height_percent: MODAL_DEFAULT_HEIGHT_PERCENT,
            mouse_enabled: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            file: LOG_FILE_DEFAULT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("selectbox.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("selectbox").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.placeholder.is_empty() {
            anyhow::bail!("placeholder cannot be empty");
        }

        for (name, value) in [
            ("modal_width_percent", self.ui.modal_width_percent),
            ("modal_height_percent", self.ui.modal_height_percent),
        ] {
            if !(MODAL_MIN_PERCENT..=MODAL_MAX_PERCENT).contains(&value) {
                anyhow::bail!(
                    "{} must be between {} and {}, got {}",
                    name,
                    MODAL_MIN_PERCENT,
                    MODAL_MAX_PERCENT,
                    value
                );
            }
        }

        if self.ui.show_title && self.ui.modal_title.is_empty() {
            anyhow::bail!("modal_title cannot be empty while show_title is enabled");
        }

        if self.logging.enabled && self.logging.file.is_empty() {
            anyhow::bail!("logging.file cannot be empty while logging is enabled");
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# selectbox Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("selectbox"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
