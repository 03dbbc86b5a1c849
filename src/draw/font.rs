//! Font descriptor for sticker glyphs.

/// Font used to draw sticker glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Noto Color Emoji")
    pub family: String,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
        }
    }

    /// Converts this descriptor to a Pango font description string.
    ///
    /// Sizes are absolute pixels so glyphs match the canvas coordinate space.
    /// Example: "Sans 24px"
    pub fn to_pango_string(&self, size: f64) -> String {
        format!("{} {}px", self.family, size.round() as i32)
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new("Sans")
    }
}
