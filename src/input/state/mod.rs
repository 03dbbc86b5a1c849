mod actions;
mod core;
mod mouse;
mod render;

pub use core::{DrawingState, InputState, ToolPreview, ToolSettings};
