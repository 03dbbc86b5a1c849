//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What clearing the canvas does with items that could still be redone.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ClearPolicy {
    /// Keep the redo stack; undone items can be redone onto the cleared canvas
    #[default]
    KeepRedo,
    /// Empty the redo stack together with the display list
    DiscardRedo,
}

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// background = "lightgrey"
///
/// # Custom RGB color (0-255 per component)
/// background = [255, 250, 240]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, white, black, lightgrey, gray
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown color names fall back to light grey with a warning. RGB arrays
    /// are converted from the 0-255 range to 0.0-1.0 with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using lightgrey", name);
                LIGHT_GREY
            }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_spec_scales_components() {
        let color = ColorSpec::Rgb([255, 0, 51]).to_color();
        assert_eq!(color, Color::new(1.0, 0.0, 0.2, 1.0));
    }

    #[test]
    fn unknown_name_falls_back_to_background_grey() {
        assert_eq!(ColorSpec::Name("nope".into()).to_color(), LIGHT_GREY);
    }
}
