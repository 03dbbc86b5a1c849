//! Event scripts: recorded input replayed against a sketchpad without a display.
//!
//! A script is a TOML file with an `events` array, each entry tagged by `event`:
//!
//! ```toml
//! [[events]]
//! event = "marker"
//!
//! [[events]]
//! event = "pointer-down"
//! x = 10.0
//! y = 20.0
//!
//! [[events]]
//! event = "pointer-up"
//! x = 10.0
//! y = 20.0
//! ```

use crate::input::SketchEvent;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading an event script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read event script: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse event script: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Ordered list of input events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub events: Vec<SketchEvent>,
}

impl Script {
    /// Parses a script from TOML source.
    pub fn from_toml(source: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = fs::read_to_string(path)?;
        let script = Self::from_toml(&source)?;
        log::debug!(
            "Loaded {} event(s) from {}",
            script.events.len(),
            path.display()
        );
        Ok(script)
    }
}
