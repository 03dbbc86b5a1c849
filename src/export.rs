//! PNG export of the drawing surface.

use crate::config::ExportConfig;
use crate::util;
use chrono::Local;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting a sketch.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export scale {0} is out of range for this surface")]
    InvalidScale(u32),

    #[error("Invalid filename template '{0}'")]
    InvalidTemplate(String),

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to save export: {0}")]
    Io(#[from] std::io::Error),
}

/// Where and how exported images are written.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Directory to save exports to.
    pub directory: PathBuf,
    /// Filename template (supports chrono format specifiers), without extension.
    pub filename_template: String,
    /// Integer upscaling factor.
    pub scale: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from_config(&ExportConfig::default())
    }
}

impl ExportOptions {
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            directory: util::expand_tilde(&config.directory),
            filename_template: config.filename_template.clone(),
            scale: config.scale,
        }
    }
}

/// Generate a PNG filename from the template and the current time.
pub fn generate_filename(template: &str) -> Result<String, ExportError> {
    let mut filename = String::new();
    write!(filename, "{}", Local::now().format(template))
        .map_err(|_| ExportError::InvalidTemplate(template.to_string()))?;
    Ok(format!("{filename}.png"))
}

/// Ensure the export directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Copies `surface` onto a new surface `scale` times larger in each dimension.
pub fn render_scaled(
    surface: &cairo::ImageSurface,
    scale: u32,
) -> Result<cairo::ImageSurface, ExportError> {
    let invalid = || ExportError::InvalidScale(scale);
    if scale == 0 {
        return Err(invalid());
    }

    let factor = i32::try_from(scale).map_err(|_| invalid())?;
    let width = surface.width().checked_mul(factor).ok_or_else(invalid)?;
    let height = surface.height().checked_mul(factor).ok_or_else(invalid)?;
    let scaled = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;

    {
        let ctx = cairo::Context::new(&scaled)?;
        ctx.scale(scale as f64, scale as f64);
        ctx.set_source_surface(surface, 0.0, 0.0)?;
        ctx.paint()?;
    }
    scaled.flush();

    Ok(scaled)
}

/// Scales `surface` and writes it to `path` as PNG.
///
/// Returns the path written.
pub fn export_png(
    surface: &cairo::ImageSurface,
    scale: u32,
    path: &Path,
) -> Result<PathBuf, ExportError> {
    let scaled = render_scaled(surface, scale)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_directory_exists(parent)?;
    }

    let mut file = File::create(path)?;
    scaled.write_to_png(&mut file)?;

    log::info!(
        "Exported {}x{} PNG to {}",
        scaled.width(),
        scaled.height(),
        path.display()
    );

    Ok(path.to_path_buf())
}

/// Exports into the configured directory under a generated filename.
pub fn export_to_directory(
    surface: &cairo::ImageSurface,
    options: &ExportOptions,
) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&options.directory)?;
    let filename = generate_filename(&options.filename_template)?;
    export_png(surface, options.scale, &directory.join(filename))
}
