use crate::draw::{
    render_background, render_displayables, render_sticker, render_stroke, render_tool_preview,
};
use log::debug;

use super::{DrawingState, InputState};

impl InputState {
    /// Repaints the whole surface from the current session state.
    ///
    /// Layers, bottom to top:
    /// 1. background fill
    /// 2. committed display list items in order
    /// 3. the stroke being drawn
    /// 4. the tool preview (only while idle)
    /// 5. the sticker cursor (unless a sticker is being dragged)
    ///
    /// Clears `needs_redraw`.
    pub fn render(&mut self, ctx: &cairo::Context) {
        debug!(
            "Rendering {} item(s), {} redoable",
            self.history.len(),
            self.history.redo_stack().len()
        );

        render_background(ctx, self.background);
        render_displayables(ctx, self.history.display_list(), &self.font_descriptor);

        if let DrawingState::Drawing { stroke } = &self.state {
            render_stroke(ctx, stroke);
        }

        if matches!(self.state, DrawingState::Idle)
            && let Some(preview) = &self.tool_preview
        {
            render_tool_preview(ctx, preview.position, preview.radius);
        }

        if !self.is_placing()
            && let Some(cursor) = &self.sticker_cursor
        {
            render_sticker(ctx, cursor, &self.font_descriptor);
        }

        self.needs_redraw = false;
    }
}
