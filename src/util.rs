//! Utility functions for colors, sticker geometry, and paths.
//!
//! This module provides:
//! - Color name mapping for the configuration file
//! - Sticker glyph origin calculation
//! - Hue normalization
//! - Tilde expansion for user-supplied paths

use crate::draw::{Color, Point, color::*};
use std::path::PathBuf;

// ============================================================================
// Sticker Geometry
// ============================================================================

/// Returns the text origin of a sticker anchored at `position`.
///
/// Text is drawn from its baseline start, so the origin is shifted left by
/// two thirds of the font size and down by one third. This puts the glyph
/// roughly centered on the pointer.
pub fn sticker_origin(position: Point, font_size: f64) -> Point {
    Point::new(position.x - font_size / 1.5, position.y + font_size / 3.0)
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Wraps a hue slider value into `[0, 360)`.
pub fn normalize_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    hue.rem_euclid(360.0)
}

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "white", "black", "lightgrey"/"lightgray", "gray"/"grey"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "lightgrey" | "lightgray" => Some(LIGHT_GREY),
        "gray" | "grey" => Some(GRAY),
        _ => None,
    }
}

// ============================================================================
// Paths
// ============================================================================

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sticker_origin_matches_default_font_size() {
        assert_eq!(
            sticker_origin(Point::new(10.0, 20.0), 24.0),
            Point::new(-6.0, 28.0)
        );
    }

    #[test]
    fn normalize_hue_wraps() {
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(725.0), 5.0);
        assert_eq!(normalize_hue(f64::NAN), 0.0);
    }

    #[test]
    fn name_to_color_is_case_insensitive() {
        assert_eq!(name_to_color("LightGrey"), Some(LIGHT_GREY));
        assert_eq!(name_to_color("RED"), Some(RED));
        assert_eq!(name_to_color("mauve"), None);
    }

    #[test]
    fn expand_tilde_leaves_absolute_paths() {
        if dirs::home_dir().is_some() {
            let expanded = expand_tilde("~/Pictures");
            assert!(!expanded.to_string_lossy().starts_with('~'));
        }
        assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
    }
}
