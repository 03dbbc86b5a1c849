//! Drawing state machine and input state management.

use crate::config::Config;
use crate::draw::{Color, FontDescriptor, History, Point, StickerPlacement, Stroke, hue_color};
use crate::input::tool::Tool;
use crate::util;

/// Current drawing mode state machine.
///
/// Tracks whether the user is idle, actively drawing a stroke, or dragging a
/// sticker that was just dropped. State transitions occur on pointer events.
#[derive(Debug)]
pub enum DrawingState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// Actively drawing a stroke (button held down)
    Drawing {
        /// Stroke being captured; committed on release or leave
        stroke: Stroke,
    },
    /// A sticker was dropped and is following the pointer until release.
    ///
    /// The placement is already committed; it is the last display list item.
    Placing,
}

/// Translucent dot following the pointer while a line tool is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolPreview {
    /// Dot center (last pointer position)
    pub position: Point,
    /// Dot radius in pixels
    pub radius: f64,
}

/// Line widths and preview sizes for the pencil and marker tools.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolSettings {
    pub pencil_width: f64,
    pub marker_width: f64,
    pub pencil_preview_radius: f64,
    pub marker_preview_radius: f64,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            pencil_width: 1.0,
            marker_width: 4.0,
            pencil_preview_radius: 3.0,
            marker_preview_radius: 8.0,
        }
    }
}

/// Main input state containing all drawing session state.
///
/// This struct holds the drawing history, the active tool and color, the
/// preview objects that follow the pointer, and the stroke capture state
/// machine. It processes pointer events and button actions and records
/// whether the surface needs to be repainted.
#[derive(Debug)]
pub struct InputState {
    /// Committed display list and redo buffer
    pub history: History,
    /// Active tool (pencil, marker, or a sticker glyph)
    pub(super) tool: Tool,
    /// Hue slider value in degrees (0-360)
    pub current_hue: f64,
    /// Color given to new strokes, derived from `current_hue`
    pub current_color: Color,
    /// Line width given to new strokes
    pub current_line_width: f64,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Pencil/marker footprint preview (None while a sticker is selected)
    pub tool_preview: Option<ToolPreview>,
    /// Glyph preview following the pointer while a sticker is selected
    pub sticker_cursor: Option<StickerPlacement>,
    /// Glyphs offered as stickers, in button order
    pub stickers: Vec<String>,
    /// Pencil/marker widths and preview radii
    pub tool_settings: ToolSettings,
    /// Sticker glyph size in pixels
    pub sticker_font_size: f64,
    /// Font used to render sticker glyphs
    pub font_descriptor: FontDescriptor,
    /// Background fill painted before every render
    pub background: Color,
    /// Last pointer position seen on the surface
    pub pointer: Point,
    /// Whether the surface needs to be redrawn
    pub needs_redraw: bool,
}

impl InputState {
    /// Creates an idle session with the pencil selected.
    pub fn new(
        history: History,
        tool_settings: ToolSettings,
        hue: f64,
        stickers: Vec<String>,
        sticker_font_size: f64,
        font_descriptor: FontDescriptor,
        background: Color,
    ) -> Self {
        let hue = util::normalize_hue(hue);
        let origin = Point::new(0.0, 0.0);

        Self {
            history,
            tool: Tool::Pencil,
            current_hue: hue,
            current_color: hue_color(hue),
            current_line_width: tool_settings.pencil_width,
            state: DrawingState::Idle,
            tool_preview: Some(ToolPreview {
                position: origin,
                radius: tool_settings.pencil_preview_radius,
            }),
            sticker_cursor: None,
            stickers,
            tool_settings,
            sticker_font_size,
            font_descriptor,
            background,
            pointer: origin,
            needs_redraw: true,
        }
    }

    /// Builds the initial session from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut history = History::new(
            config.history.invalidate_redo_on_commit,
            config.history.clear_policy,
        );
        history.max_items = config.history.max_items;

        let tool_settings = ToolSettings {
            pencil_width: config.tools.pencil_width,
            marker_width: config.tools.marker_width,
            pencil_preview_radius: config.tools.pencil_preview_radius,
            marker_preview_radius: config.tools.marker_preview_radius,
        };

        Self::new(
            history,
            tool_settings,
            config.tools.default_hue,
            config.stickers.palette.clone(),
            config.stickers.font_size,
            FontDescriptor::new(config.stickers.font_family.clone()),
            config.canvas.background.to_color(),
        )
    }

    /// Returns the active tool.
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Whether a stroke is currently being captured.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// Whether a dropped sticker is currently being dragged.
    pub fn is_placing(&self) -> bool {
        matches!(self.state, DrawingState::Placing)
    }

    /// The stroke being captured, if any.
    pub fn in_progress_stroke(&self) -> Option<&Stroke> {
        match &self.state {
            DrawingState::Drawing { stroke } => Some(stroke),
            _ => None,
        }
    }
}
