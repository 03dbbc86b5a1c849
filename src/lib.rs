//! Freehand sketchpad: drawing history, tool state and Cairo rendering.
//!
//! The [`Sketchpad`] controller owns the session state ([`input::InputState`])
//! and the surface it paints. Pointer events and button presses arrive as
//! [`input::SketchEvent`]s, either from an embedding UI or from an event
//! [`script::Script`], and the surface is repainted after each one.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod sketchpad;
pub mod util;

pub use config::Config;
pub use sketchpad::{SketchError, Sketchpad};
