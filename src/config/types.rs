//! Configuration type definitions.

use super::enums::{ClearPolicy, ColorSpec};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing surface settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 16 - 4096)
    #[serde(default = "default_canvas_size")]
    pub width: i32,

    /// Surface height in pixels (valid range: 16 - 4096)
    #[serde(default = "default_canvas_size")]
    pub height: i32,

    /// Background fill painted before every render
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
            background: default_background(),
        }
    }
}

/// Pencil/marker settings.
///
/// Controls the line width each tool gives new strokes, the size of the
/// preview dot that follows the pointer, and the starting hue.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ToolConfig {
    /// Line width of pencil strokes in pixels (valid range: 0.5 - 50.0)
    #[serde(default = "default_pencil_width")]
    pub pencil_width: f64,

    /// Line width of marker strokes in pixels (valid range: 0.5 - 50.0)
    #[serde(default = "default_marker_width")]
    pub marker_width: f64,

    /// Preview dot radius while the pencil is selected (valid range: 1.0 - 50.0)
    #[serde(default = "default_pencil_preview_radius")]
    pub pencil_preview_radius: f64,

    /// Preview dot radius while the marker is selected (valid range: 1.0 - 50.0)
    #[serde(default = "default_marker_preview_radius")]
    pub marker_preview_radius: f64,

    /// Initial hue in degrees; strokes use `hsl(hue, 100%, 50%)`
    #[serde(default)]
    pub default_hue: f64,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            pencil_width: default_pencil_width(),
            marker_width: default_marker_width(),
            pencil_preview_radius: default_pencil_preview_radius(),
            marker_preview_radius: default_marker_preview_radius(),
            default_hue: 0.0,
        }
    }
}

/// Sticker palette and glyph font.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StickerConfig {
    /// Glyphs offered as stickers at startup
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Font family used to draw glyphs
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Glyph size in pixels (valid range: 8.0 - 128.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

impl Default for StickerConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            font_family: default_font_family(),
            font_size: default_font_size(),
        }
    }
}

/// Undo/redo behavior.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Drop redoable items when a new stroke or sticker is committed
    #[serde(default = "default_invalidate_redo")]
    pub invalidate_redo_on_commit: bool,

    /// What clearing the canvas does with the redo stack
    #[serde(default)]
    pub clear_policy: ClearPolicy,

    /// Maximum number of committed items (0 = unlimited)
    #[serde(default)]
    pub max_items: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            invalidate_redo_on_commit: default_invalidate_redo(),
            clear_policy: ClearPolicy::default(),
            max_items: 0,
        }
    }
}

/// PNG export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Integer upscaling factor applied to the canvas (valid range: 1 - 16)
    #[serde(default = "default_export_scale")]
    pub scale: u32,

    /// Directory exported files are written to (supports `~/`)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// File name without extension (supports chrono format specifiers)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: default_export_scale(),
            directory: default_export_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_size() -> i32 {
    256
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("lightgrey".to_string())
}

fn default_pencil_width() -> f64 {
    1.0
}

fn default_marker_width() -> f64 {
    4.0
}

fn default_pencil_preview_radius() -> f64 {
    3.0
}

fn default_marker_preview_radius() -> f64 {
    8.0
}

fn default_palette() -> Vec<String> {
    vec!["😈".to_string(), "👻".to_string(), "🎃".to_string()]
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_size() -> f64 {
    24.0
}

fn default_invalidate_redo() -> bool {
    true
}

fn default_export_scale() -> u32 {
    4
}

fn default_export_directory() -> String {
    ".".to_string()
}

fn default_filename_template() -> String {
    "sketchpad".to_string()
}
