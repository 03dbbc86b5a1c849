//! Sketchpad controller: session state plus the surface it renders to.

use crate::config::Config;
use crate::export::{self, ExportError, ExportOptions};
use crate::input::{InputState, SketchEvent};
use log::debug;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while creating or repainting the drawing surface.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("Invalid canvas size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),
}

/// Single owner of a drawing session.
///
/// Every mutation goes through [`Sketchpad::dispatch`], which applies the
/// event and repaints synchronously whenever the state asks for it.
pub struct Sketchpad {
    state: InputState,
    surface: cairo::ImageSurface,
    export_options: ExportOptions,
}

impl Sketchpad {
    /// Creates a sketchpad sized and styled from `config`, painted with its background.
    pub fn new(config: &Config) -> Result<Self, SketchError> {
        let (width, height) = (config.canvas.width, config.canvas.height);
        if width <= 0 || height <= 0 {
            return Err(SketchError::InvalidSize { width, height });
        }

        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        let mut sketchpad = Self {
            state: InputState::from_config(config),
            surface,
            export_options: ExportOptions::from_config(&config.export),
        };
        sketchpad.render()?;
        Ok(sketchpad)
    }

    /// Applies one input event, repainting if anything visible changed.
    pub fn dispatch(&mut self, event: SketchEvent) -> Result<(), SketchError> {
        debug!("Event: {:?}", event);
        self.state.handle_event(event);
        if self.state.needs_redraw {
            self.render()?;
        }
        Ok(())
    }

    /// Applies events in order; returns how many were applied.
    pub fn replay<I>(&mut self, events: I) -> Result<usize, SketchError>
    where
        I: IntoIterator<Item = SketchEvent>,
    {
        let mut applied = 0;
        for event in events {
            self.dispatch(event)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Repaints the whole surface from the session state.
    pub fn render(&mut self) -> Result<(), SketchError> {
        {
            let ctx = cairo::Context::new(&self.surface)?;
            self.state.render(&ctx);
            ctx.status()?;
        }
        self.surface.flush();
        Ok(())
    }

    /// Writes the current pixels, upscaled by the configured factor, to `path`.
    pub fn export(&self, path: &Path) -> Result<PathBuf, ExportError> {
        export::export_png(&self.surface, self.export_options.scale, path)
    }

    /// Writes the current pixels into the configured export directory.
    pub fn export_default(&self) -> Result<PathBuf, ExportError> {
        export::export_to_directory(&self.surface, &self.export_options)
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    pub fn export_options_mut(&mut self) -> &mut ExportOptions {
        &mut self.export_options
    }

    /// Reads the ARGB32 value of a pixel, or `None` outside the surface.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x >= self.surface.width() || y >= self.surface.height() {
            return None;
        }

        self.surface.flush();
        let stride = self.surface.stride() as usize;
        let data = self.surface.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        let bytes = data.get(offset..offset + 4)?;
        Some(u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}
