use crate::draw::{Point, StickerPlacement, Stroke};
use log::debug;

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a primary button press.
    ///
    /// # Behavior
    /// - Sticker tool: drops the glyph at the pointer, commits it right away,
    ///   and starts dragging it
    /// - Pencil/marker: starts a stroke seeded with this point, using the
    ///   current line width and color
    /// - Ignored unless Idle
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        self.track_pointer(point);

        if !matches!(self.state, DrawingState::Idle) {
            return;
        }

        if self.tool.draws_strokes() {
            debug!(
                "Stroke started at ({x}, {y}), width {}",
                self.current_line_width
            );
            self.state = DrawingState::Drawing {
                stroke: Stroke::new(point, self.current_line_width, self.current_color),
            };
        } else if let Some(glyph) = self.tool.sticker() {
            let placement = StickerPlacement::new(glyph, point, self.sticker_font_size);
            if self.history.commit(placement) {
                debug!("Placed sticker '{glyph}' at ({x}, {y})");
                self.state = DrawingState::Placing;
            }
        }
        self.needs_redraw = true;
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - Drawing: appends the point to the in-progress stroke
    /// - Placing: moves the sticker that was just dropped
    /// - Idle: moves the tool preview or sticker cursor
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        self.track_pointer(point);

        match &mut self.state {
            DrawingState::Drawing { stroke } => {
                stroke.append_point(point);
            }
            DrawingState::Placing => {
                if let Some(sticker) = self
                    .history
                    .last_mut()
                    .and_then(|item| item.as_sticker_mut())
                {
                    sticker.set_position(point);
                }
            }
            DrawingState::Idle => {
                if self.tool_preview.is_none() && self.sticker_cursor.is_none() {
                    return;
                }
            }
        }
        self.needs_redraw = true;
    }

    /// Processes a primary button release; commits any in-progress stroke.
    pub fn on_pointer_up(&mut self, x: f64, y: f64) {
        self.track_pointer(Point::new(x, y));
        self.finish_interaction();
        self.needs_redraw = true;
    }

    /// Processes the pointer leaving the surface.
    ///
    /// An in-progress stroke is committed exactly as on release, so leaving
    /// the surface never loses work.
    pub fn on_pointer_leave(&mut self) {
        if self.finish_interaction() {
            self.needs_redraw = true;
        }
    }

    /// Ends the current stroke or sticker drag and returns to Idle.
    ///
    /// Returns `true` if there was anything to finish.
    fn finish_interaction(&mut self) -> bool {
        match std::mem::replace(&mut self.state, DrawingState::Idle) {
            DrawingState::Drawing { stroke } => {
                debug!("Stroke finished with {} point(s)", stroke.points().len());
                self.history.commit(stroke);
                true
            }
            DrawingState::Placing => true,
            DrawingState::Idle => false,
        }
    }

    /// Keeps the pointer position and the preview objects in sync.
    fn track_pointer(&mut self, point: Point) {
        self.pointer = point;
        if let Some(preview) = &mut self.tool_preview {
            preview.position = point;
        }
        if let Some(cursor) = &mut self.sticker_cursor {
            cursor.set_position(point);
        }
    }
}
