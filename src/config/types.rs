//! Configuration type definitions.

use super::enums::OutputFormat;
use crate::session::DEFAULT_UNMIXER_URL;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Image fitting settings.
///
/// Images larger than the maximum display size are scaled down (keeping the
/// aspect ratio) before sampling, so averages are computed on the same pixels
/// the user sees.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Maximum fitted width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_max_width")]
    pub max_width: u32,

    /// Maximum fitted height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_max_height")]
    pub max_height: u32,

    /// Scale oversized images down to `max_width` x `max_height`
    /// Set to false to sample the image at its native resolution
    #[serde(default = "default_fit_to_display")]
    pub fit_to_display: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
            max_height: default_max_height(),
            fit_to_display: default_fit_to_display(),
        }
    }
}

/// Selection tool settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SelectionConfig {
    /// Tool active at startup (rectangle, circle, polygon, freehand)
    #[serde(default = "default_tool")]
    pub default_tool: String,

    /// Two polygon clicks closer together than this complete the polygon
    /// (valid range: 50 - 2000 milliseconds)
    #[serde(default = "default_double_click_ms")]
    pub double_click_ms: u64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            double_click_ms: default_double_click_ms(),
        }
    }
}

/// Result output settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Output format: "text" or "json"
    #[serde(default)]
    pub format: OutputFormat,

    /// Base address of the color unmixer; the hex code is appended as the
    /// URL fragment
    #[serde(default = "default_unmixer_url")]
    pub unmixer_url: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            unmixer_url: default_unmixer_url(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_max_width() -> u32 {
    1000
}

fn default_max_height() -> u32 {
    700
}

fn default_fit_to_display() -> bool {
    true
}

fn default_tool() -> String {
    "freehand".to_string()
}

fn default_double_click_ms() -> u64 {
    300
}

fn default_unmixer_url() -> String {
    DEFAULT_UNMIXER_URL.to_string()
}
