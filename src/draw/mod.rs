//! Rendering primitives and the drawing history (Cairo-based).
//!
//! This module defines the core drawing types of the sketchpad:
//! - [`Color`]: RGBA color representation with HSL conversion
//! - [`Displayable`]: strokes and sticker placements that make up a sketch
//! - [`History`]: display list plus redo buffer
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod font;
pub mod history;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use color::{Color, hue_color};
pub use font::FontDescriptor;
pub use history::History;
pub use render::{
    render_background, render_displayable, render_displayables, render_sticker, render_stroke,
    render_tool_preview,
};
pub use shape::{Displayable, Point, StickerPlacement, Stroke};
