//! Displayable items: freehand strokes and sticker placements.

use super::color::Color;
use crate::util;
use serde::{Deserialize, Serialize};

/// A surface-relative coordinate captured from a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Freehand stroke: a polyline through the points traced during a drag.
///
/// Width and color are fixed when the stroke is created; only the point
/// sequence grows, and only while the stroke is being drawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Points in the order they were recorded
    points: Vec<Point>,
    /// Line width in pixels
    pub line_width: f64,
    /// Stroke color
    pub color: Color,
}

impl Stroke {
    /// Starts a stroke seeded with the pointer-down position.
    pub fn new(start: Point, line_width: f64, color: Color) -> Self {
        Self {
            points: vec![start],
            line_width,
            color,
        }
    }

    /// Appends the current pointer position to the stroke.
    pub fn append_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of line segments this stroke renders (zero below two points).
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

/// A sticker glyph dropped on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StickerPlacement {
    /// Glyph or short string drawn as text
    pub glyph: String,
    /// Pointer position the sticker is anchored to
    position: Point,
    /// Font size in pixels
    pub font_size: f64,
}

impl StickerPlacement {
    pub fn new(glyph: impl Into<String>, position: Point, font_size: f64) -> Self {
        Self {
            glyph: glyph.into(),
            position,
            font_size,
        }
    }

    /// Moves the sticker to follow the pointer.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Text origin for rendering, offset so the glyph appears centered near the pointer.
    pub fn origin(&self) -> Point {
        util::sticker_origin(self.position, self.font_size)
    }
}

/// Anything that can be drawn from the display list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Displayable {
    /// Freehand pencil/marker stroke
    Stroke(Stroke),
    /// Dropped sticker glyph
    Sticker(StickerPlacement),
}

impl Displayable {
    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Displayable::Stroke(stroke) => Some(stroke),
            Displayable::Sticker(_) => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&StickerPlacement> {
        match self {
            Displayable::Sticker(sticker) => Some(sticker),
            Displayable::Stroke(_) => None,
        }
    }

    pub fn as_sticker_mut(&mut self) -> Option<&mut StickerPlacement> {
        match self {
            Displayable::Sticker(sticker) => Some(sticker),
            Displayable::Stroke(_) => None,
        }
    }
}

impl From<Stroke> for Displayable {
    fn from(stroke: Stroke) -> Self {
        Displayable::Stroke(stroke)
    }
}

impl From<StickerPlacement> for Displayable {
    fn from(sticker: StickerPlacement) -> Self {
        Displayable::Sticker(sticker)
    }
}
