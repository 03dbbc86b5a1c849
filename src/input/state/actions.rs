use crate::draw::{StickerPlacement, hue_color};
use crate::input::{events::SketchEvent, tool::Tool};
use crate::util;
use log::debug;

use super::{DrawingState, InputState, ToolPreview};

impl InputState {
    /// Dispatches a single input event.
    ///
    /// Invalid actions (undo with nothing to undo, an empty custom sticker, ...)
    /// are silently ignored.
    pub fn handle_event(&mut self, event: SketchEvent) {
        match event {
            SketchEvent::PointerDown { x, y } => self.on_pointer_down(x, y),
            SketchEvent::PointerMove { x, y } => self.on_pointer_move(x, y),
            SketchEvent::PointerUp { x, y } => self.on_pointer_up(x, y),
            SketchEvent::PointerLeave => self.on_pointer_leave(),
            SketchEvent::Clear => self.clear(),
            SketchEvent::Undo => {
                self.undo();
            }
            SketchEvent::Redo => {
                self.redo();
            }
            SketchEvent::Pencil => self.select_pencil(),
            SketchEvent::Marker => self.select_marker(),
            SketchEvent::Sticker { glyph } => self.select_sticker(glyph),
            SketchEvent::CustomSticker { text } => {
                self.add_custom_sticker(&text);
            }
            SketchEvent::Hue { value } => self.set_hue(value),
        }
    }

    /// Selects the thin pencil.
    pub fn select_pencil(&mut self) {
        let width = self.tool_settings.pencil_width;
        let radius = self.tool_settings.pencil_preview_radius;
        self.select_line_tool(Tool::Pencil, width, radius);
    }

    /// Selects the thick marker.
    pub fn select_marker(&mut self) {
        let width = self.tool_settings.marker_width;
        let radius = self.tool_settings.marker_preview_radius;
        self.select_line_tool(Tool::Marker, width, radius);
    }

    /// Switches to a line tool: new strokes get `width`, the sticker selection
    /// is dropped and the preview is replaced with one sized for the tool.
    ///
    /// A sticker drag in progress ends here.
    fn select_line_tool(&mut self, tool: Tool, width: f64, preview_radius: f64) {
        debug!("Selected {:?} (width {})", tool, width);
        self.stop_placing();
        self.tool = tool;
        self.current_line_width = width;
        self.sticker_cursor = None;
        self.tool_preview = Some(ToolPreview {
            position: self.pointer,
            radius: preview_radius,
        });
        if !self.is_drawing() {
            self.needs_redraw = true;
        }
    }

    /// Selects a sticker glyph; the line tool preview is replaced by the glyph cursor.
    ///
    /// An empty glyph is ignored.
    pub fn select_sticker(&mut self, glyph: impl Into<String>) {
        let glyph = glyph.into();
        if glyph.is_empty() {
            return;
        }

        debug!("Selected sticker '{glyph}'");
        self.stop_placing();
        self.sticker_cursor = Some(StickerPlacement::new(
            glyph.clone(),
            self.pointer,
            self.sticker_font_size,
        ));
        self.tool = Tool::Sticker(glyph);
        self.tool_preview = None;
        if !self.is_drawing() {
            self.needs_redraw = true;
        }
    }

    /// Adds a custom sticker to the palette.
    ///
    /// The text is trimmed; empty input is ignored. Returns `true` if the palette grew.
    pub fn add_custom_sticker(&mut self, text: &str) -> bool {
        let glyph = text.trim();
        if glyph.is_empty() || self.stickers.iter().any(|existing| existing == glyph) {
            return false;
        }

        debug!("Added custom sticker '{glyph}'");
        self.stickers.push(glyph.to_string());
        true
    }

    /// Sets the hue used for strokes created from now on.
    ///
    /// Existing strokes keep the color they were created with.
    pub fn set_hue(&mut self, hue: f64) {
        self.current_hue = util::normalize_hue(hue);
        self.current_color = hue_color(self.current_hue);
    }

    /// Moves the last committed item to the redo stack.
    ///
    /// Returns `false` (and does nothing) when the display list is empty.
    pub fn undo(&mut self) -> bool {
        if !self.history.undo() {
            return false;
        }
        self.stop_placing();
        self.needs_redraw = true;
        true
    }

    /// Restores the most recently undone item.
    ///
    /// Returns `false` (and does nothing) when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.redo() {
            return false;
        }
        self.stop_placing();
        self.needs_redraw = true;
        true
    }

    /// Discards the display list and repaints the background.
    pub fn clear(&mut self) {
        self.history.clear();
        self.stop_placing();
        self.needs_redraw = true;
    }

    /// Stops dragging a sticker once it is no longer the last display list item
    /// or the tool it was dropped with is no longer selected.
    fn stop_placing(&mut self) {
        if self.is_placing() {
            self.state = DrawingState::Idle;
        }
    }
}
