//! CLI command implementations

pub mod adjust;
pub mod batch;
pub mod filter;
pub mod resize;
pub mod rotate;
pub mod simple;

use anyhow::{Context, Result};
use pixfx_core::Raster;
use std::path::Path;
use tracing::info;

/// Load image from path
pub fn load_image(path: &Path) -> Result<Raster> {
    pixfx_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Load an overlay image (halo, grain)
pub fn load_overlay(path: &Path) -> Result<Raster> {
    pixfx_io::read_overlay(path)
        .with_context(|| format!("Failed to load overlay: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &Raster) -> Result<()> {
    pixfx_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Reports a finished single-image command.
pub fn report_saved(path: &Path, image: &Raster, verbose: u8) {
    info!(path = %path.display(), width = image.width(), height = image.height(), "saved");
    if verbose > 0 {
        println!(
            "Saved: {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
    }
}
