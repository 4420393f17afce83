//! Configuration file support for colorlasso.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/colorlasso/config.toml`. Settings cover image fitting, the
//! selection tools, and result output.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::OutputFormat;
pub use types::{CanvasConfig, OutputConfig, SelectionConfig};

use crate::input::{InputState, Tool};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const MAX_CANVAS_EXTENT: u32 = 16_384;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// max_width = 1000
/// max_height = 700
/// fit_to_display = true
///
/// [selection]
/// default_tool = "polygon"
/// double_click_ms = 300
///
/// [output]
/// format = "json"
/// unmixer_url = "https://trycolors.com/unmixer"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Image fitting (maximum display size)
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Selection tool defaults
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Result output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced with
    /// the default for strings) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.max_width`, `canvas.max_height`: 1 - 16384
    /// - `selection.double_click_ms`: 50 - 2000
    /// - `selection.default_tool`: a known tool name
    fn validate_and_clamp(&mut self) {
        if !(1..=MAX_CANVAS_EXTENT).contains(&self.canvas.max_width) {
            log::warn!(
                "Invalid canvas max_width {}, clamping to 1-{} range",
                self.canvas.max_width,
                MAX_CANVAS_EXTENT
            );
            self.canvas.max_width = self.canvas.max_width.clamp(1, MAX_CANVAS_EXTENT);
        }

        if !(1..=MAX_CANVAS_EXTENT).contains(&self.canvas.max_height) {
            log::warn!(
                "Invalid canvas max_height {}, clamping to 1-{} range",
                self.canvas.max_height,
                MAX_CANVAS_EXTENT
            );
            self.canvas.max_height = self.canvas.max_height.clamp(1, MAX_CANVAS_EXTENT);
        }

        if !(50..=2000).contains(&self.selection.double_click_ms) {
            log::warn!(
                "Invalid double_click_ms {}, clamping to 50-2000 range",
                self.selection.double_click_ms
            );
            self.selection.double_click_ms = self.selection.double_click_ms.clamp(50, 2000);
        }

        if self.selection.default_tool.parse::<Tool>().is_err() {
            log::warn!(
                "Invalid default_tool '{}', falling back to 'freehand'",
                self.selection.default_tool
            );
            self.selection.default_tool = Tool::Freehand.to_string();
        }
    }

    /// The startup tool named by `selection.default_tool`.
    pub fn default_tool(&self) -> Tool {
        self.selection.default_tool.parse().unwrap_or_default()
    }

    pub fn double_click_window(&self) -> Duration {
        Duration::from_millis(self.selection.double_click_ms)
    }

    /// Builds an idle input state from the selection settings.
    pub fn input_state(&self) -> InputState {
        InputState::with_defaults(self.default_tool(), self.double_click_window())
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/colorlasso/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("colorlasso");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
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

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses TOML text and validates the result.
    fn from_toml(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
