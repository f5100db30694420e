use std::path::Path;

use anyhow::Context as _;
use image::GrayImage;
use image::imageops::{self, FilterType};

use crate::foundation::error::{GlyphError, GlyphResult};
use crate::io::naming::is_raster_file;
use crate::io::raster::{read_gray, write_gray};

/// Resize to `size × size`.
///
/// Shrinking averages the covered source area; enlarging (on either axis) falls back to
/// bilinear interpolation.
pub fn resize_image(img: &GrayImage, size: u32) -> GlyphResult<GrayImage> {
    if size == 0 {
        return Err(GlyphError::validation("resize target must be > 0"));
    }
    let (w, h) = img.dimensions();
    if (w, h) == (size, size) {
        return Ok(img.clone());
    }
    if size <= w && size <= h {
        Ok(imageops::thumbnail(img, size, size))
    } else {
        Ok(imageops::resize(img, size, size, FilterType::Triangle))
    }
}

/// Resize every `.png`/`.jpg` directly inside `dir` to `size × size`, overwriting in place.
///
/// Returns the number of files rewritten. Stops at the first unreadable file.
#[tracing::instrument]
pub fn resize_folder(dir: &Path, size: u32) -> GlyphResult<usize> {
    let mut paths = Vec::new();
    for entry in
        std::fs::read_dir(dir).with_context(|| format!("list folder '{}'", dir.display()))?
    {
        let path = entry
            .with_context(|| format!("list folder '{}'", dir.display()))?
            .path();
        if path.is_file() && is_raster_file(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    for path in &paths {
        let img = read_gray(path)?;
        write_gray(path, &resize_image(&img, size)?)?;
    }
    tracing::info!(files = paths.len(), size, "resized folder");
    Ok(paths.len())
}

#[cfg(test)]
#[path = "../../tests/unit/io/resize.rs"]
mod tests;
