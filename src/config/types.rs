//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas settings.
///
/// Controls the scene extents; the exported SVG document and its `viewBox`
/// use these dimensions.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in scene units (valid range: 100 - 16384)
    #[serde(default = "default_canvas_extent")]
    pub width: f64,

    /// Canvas height in scene units (valid range: 100 - 16384)
    #[serde(default = "default_canvas_extent")]
    pub height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_extent(),
            height: default_canvas_extent(),
        }
    }
}

/// Snap grid settings.
///
/// Controls the pitch of the snap grid applied to pointer input and whether
/// snapping starts enabled. Command-language input never snaps.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GridConfig {
    /// Grid pitch in scene units (valid range: 1.0 - 200.0)
    #[serde(default = "default_grid_step")]
    pub step: f64,

    /// Whether pointer snapping starts enabled
    #[serde(default = "default_snap_enabled")]
    pub snap_enabled: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            step: default_grid_step(),
            snap_enabled: default_snap_enabled(),
        }
    }
}

/// SVG export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Document title embedded in the SVG output
    #[serde(default = "default_export_title")]
    pub title: String,

    /// Document description embedded in the SVG output
    #[serde(default = "default_export_description")]
    pub description: String,

    /// Optional background color painted under all shapes.
    /// Omit for a transparent background.
    #[serde(default)]
    pub background: Option<ColorSpec>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            title: default_export_title(),
            description: default_export_description(),
            background: None,
        }
    }
}

fn default_canvas_extent() -> f64 {
    crate::draw::scene::DEFAULT_CANVAS_SIZE
}

fn default_grid_step() -> f64 {
    crate::input::snap::DEFAULT_GRID_STEP
}

fn default_snap_enabled() -> bool {
    true
}

fn default_export_title() -> String {
    "SVG Drawing".to_string()
}

fn default_export_description() -> String {
    "Exported drawing".to_string()
}
