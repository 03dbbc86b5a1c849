//! Drawing tool selection.

/// Drawing tool selection.
///
/// Exactly one tool is active at a time. The active tool determines what a
/// pointer-down creates: a stroke for pencil/marker, a sticker placement otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tool {
    /// Thin freehand stroke
    Pencil,
    /// Thick freehand stroke
    Marker,
    /// Drops the given glyph on pointer-down and drags it until release
    Sticker(String),
}

impl Tool {
    /// Whether pointer-down starts a stroke with this tool.
    pub fn draws_strokes(&self) -> bool {
        matches!(self, Tool::Pencil | Tool::Marker)
    }

    /// Glyph of the sticker tool, if selected.
    pub fn sticker(&self) -> Option<&str> {
        match self {
            Tool::Sticker(glyph) => Some(glyph.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_line_tools_draw_strokes() {
        assert!(Tool::Pencil.draws_strokes());
        assert!(Tool::Marker.draws_strokes());
        assert!(!Tool::Sticker("👻".to_string()).draws_strokes());
    }

    #[test]
    fn sticker_glyph_is_exposed() {
        assert_eq!(Tool::Sticker("🎃".to_string()).sticker(), Some("🎃"));
        assert_eq!(Tool::Marker.sticker(), None);
    }
}
