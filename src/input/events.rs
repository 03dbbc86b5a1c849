//! Input event types delivered to the sketchpad controller.

use serde::{Deserialize, Serialize};

/// A pointer event or button press.
///
/// Pointer coordinates are relative to the drawing surface. The serialized
/// form is tagged by `event`, e.g. `{ event = "pointer-down", x = 10, y = 20 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum SketchEvent {
    /// Primary button pressed over the surface
    PointerDown { x: f64, y: f64 },
    /// Pointer moved over the surface
    PointerMove { x: f64, y: f64 },
    /// Primary button released
    PointerUp { x: f64, y: f64 },
    /// Pointer left the surface
    PointerLeave,
    /// "Clear" button
    Clear,
    /// "Undo" button
    Undo,
    /// "Redo" button
    Redo,
    /// "Pencil" button
    Pencil,
    /// "Marker" button
    Marker,
    /// A sticker button
    Sticker { glyph: String },
    /// Text entered at the custom-sticker prompt
    CustomSticker { text: String },
    /// Color slider moved to `value` degrees
    Hue { value: f64 },
}
