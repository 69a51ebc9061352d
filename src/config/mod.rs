//! Configuration file support for vecsketch.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/vecsketch/config.toml`. Settings
//! include canvas extents, snap grid behavior, and SVG export metadata.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, ExportConfig, GridConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 2000.0
/// height = 2000.0
///
/// [grid]
/// step = 20.0
/// snap_enabled = true
///
/// [export]
/// title = "SVG Drawing"
/// description = "Exported drawing"
/// background = "white"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas extents
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Snap grid behavior
    #[serde(default)]
    pub grid: GridConfig,

    /// SVG export metadata
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't produce a
    /// degenerate scene or grid. Invalid values are clamped to the nearest
    /// valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width` / `canvas.height`: 100.0 - 16384.0
    /// - `grid.step`: 1.0 - 200.0
    fn validate_and_clamp(&mut self) {
        // Canvas extents: 100.0 - 16384.0
        if !(100.0..=16384.0).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {:.1}, clamping to 100.0-16384.0 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(100.0, 16384.0);
        }

        if !(100.0..=16384.0).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {:.1}, clamping to 100.0-16384.0 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(100.0, 16384.0);
        }

        // Grid step: 1.0 - 200.0
        if !(1.0..=200.0).contains(&self.grid.step) {
            log::warn!(
                "Invalid grid step {:.1}, clamping to 1.0-200.0 range",
                self.grid.step
            );
            self.grid.step = self.grid.step.clamp(1.0, 200.0);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/vecsketch/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("vecsketch");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at
    /// `~/.config/vecsketch/config.toml`. If the file doesn't exist, returns
    /// a Config with default values. All loaded values are validated and
    /// clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML format and writes it to
    /// `~/.config/vecsketch/config.toml`. Creates the parent directory if it
    /// doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Create directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Produces the JSON schema describing the configuration file format.
    ///
    /// Consumed by the `dump-config-schema` binary so external configuration
    /// tooling can validate user files.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
