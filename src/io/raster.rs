use std::path::Path;

use anyhow::Context as _;
use image::GrayImage;

use crate::encode::ffmpeg::ensure_parent_dir;
use crate::foundation::error::{GlyphError, GlyphResult};

/// Read a raster as single-channel 8-bit gray, converting color inputs.
///
/// Missing, unreadable, or empty files are reported as [`GlyphError::Input`].
pub fn read_gray(path: &Path) -> GlyphResult<GrayImage> {
    if !path.is_file() {
        return Err(GlyphError::input(path, "file not found"));
    }
    let img = image::open(path)
        .map_err(|e| GlyphError::input(path, e))?
        .to_luma8();
    if img.width() == 0 || img.height() == 0 {
        return Err(GlyphError::input(path, "image has no samples"));
    }
    Ok(img)
}

/// Write a gray raster, creating parent directories. Format follows the extension.
pub fn write_gray(path: &Path, img: &GrayImage) -> GlyphResult<()> {
    ensure_parent_dir(path)?;
    img.save(path)
        .with_context(|| format!("write image '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote image");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/io/raster.rs"]
mod tests;
