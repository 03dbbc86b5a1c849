//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include canvas size and
//! background, tool widths, the sticker palette, undo/redo policy and export options.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ClearPolicy, ColorSpec};
pub use types::{CanvasConfig, ExportConfig, HistoryConfig, StickerConfig, ToolConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 256
/// height = 256
/// background = "lightgrey"
///
/// [tools]
/// pencil_width = 1.0
/// marker_width = 4.0
///
/// [stickers]
/// palette = ["😈", "👻", "🎃"]
///
/// [history]
/// invalidate_redo_on_commit = true
/// clear_policy = "keep-redo"
///
/// [export]
/// scale = 4
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Drawing surface size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Pencil/marker widths, preview sizes and starting hue
    #[serde(default)]
    pub tools: ToolConfig,

    /// Sticker palette and glyph font
    #[serde(default)]
    pub stickers: StickerConfig,

    /// Undo/redo behavior
    #[serde(default)]
    pub history: HistoryConfig,

    /// PNG export options
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`/`canvas.height`: 16 - 4096
    /// - `tools.*_width`: 0.5 - 50.0
    /// - `tools.*_preview_radius`: 1.0 - 50.0
    /// - `tools.default_hue`: wrapped into 0 - 360
    /// - `stickers.font_size`: 8.0 - 128.0
    /// - `export.scale`: 1 - 16
    pub fn validate_and_clamp(&mut self) {
        for (name, value) in [
            ("canvas.width", &mut self.canvas.width),
            ("canvas.height", &mut self.canvas.height),
        ] {
            if !(16..=4096).contains(&*value) {
                log::warn!("Invalid {name} {value}, clamping to 16-4096 range");
                *value = (*value).clamp(16, 4096);
            }
        }

        for (name, value) in [
            ("tools.pencil_width", &mut self.tools.pencil_width),
            ("tools.marker_width", &mut self.tools.marker_width),
        ] {
            if !(0.5..=50.0).contains(&*value) {
                log::warn!("Invalid {name} {value:.1}, clamping to 0.5-50.0 range");
                *value = if value.is_nan() { 1.0 } else { (*value).clamp(0.5, 50.0) };
            }
        }

        for (name, value) in [
            (
                "tools.pencil_preview_radius",
                &mut self.tools.pencil_preview_radius,
            ),
            (
                "tools.marker_preview_radius",
                &mut self.tools.marker_preview_radius,
            ),
        ] {
            if !(1.0..=50.0).contains(&*value) {
                log::warn!("Invalid {name} {value:.1}, clamping to 1.0-50.0 range");
                *value = if value.is_nan() { 3.0 } else { (*value).clamp(1.0, 50.0) };
            }
        }

        let hue = crate::util::normalize_hue(self.tools.default_hue);
        if hue != self.tools.default_hue {
            log::warn!(
                "Invalid default_hue {:.1}, wrapping to {:.1}",
                self.tools.default_hue,
                hue
            );
            self.tools.default_hue = hue;
        }

        if !(8.0..=128.0).contains(&self.stickers.font_size) {
            log::warn!(
                "Invalid sticker font_size {:.1}, clamping to 8.0-128.0 range",
                self.stickers.font_size
            );
            self.stickers.font_size = if self.stickers.font_size.is_nan() {
                24.0
            } else {
                self.stickers.font_size.clamp(8.0, 128.0)
            };
        }

        let before = self.stickers.palette.len();
        self.stickers.palette.retain(|glyph| !glyph.trim().is_empty());
        if self.stickers.palette.len() != before {
            log::warn!(
                "Dropped {} empty sticker(s) from palette",
                before - self.stickers.palette.len()
            );
        }

        if !(1..=16).contains(&self.export.scale) {
            log::warn!(
                "Invalid export scale {}, clamping to 1-16 range",
                self.export.scale
            );
            self.export.scale = self.export.scale.clamp(1, 16);
        }

        if self.export.filename_template.trim().is_empty() {
            log::warn!("Empty export filename_template, falling back to 'sketchpad'");
            self.export.filename_template = "sketchpad".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from a TOML string without validation.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Returns the JSON schema of the configuration file, pretty-printed.
    pub fn json_schema() -> Result<String> {
        let schema = schemars::schema_for!(Config);
        serde_json::to_string_pretty(&schema).context("Failed to serialize config schema")
    }
}
