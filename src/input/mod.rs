//! Input handling and tool state machine.
//!
//! This module translates pointer events and button presses into drawing actions.
//! It maintains the current tool, drawing parameters (color, line width),
//! and the state machine for stroke capture and sticker placement.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::SketchEvent;
pub use state::{DrawingState, InputState, ToolPreview, ToolSettings};
pub use tool::Tool;
