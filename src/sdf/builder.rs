use image::GrayImage;

use crate::foundation::core::{BINARIZE_THRESHOLD, Size};
use crate::foundation::error::{GlyphError, GlyphResult};
use crate::sdf::distance::{distance_to_background, distance_to_foreground};
use crate::sdf::field::{SdfImage, SignedField};
use crate::sdf::mask::Mask;

/// Build the 8-bit SDF of a glyph image using the default threshold.
///
/// Pipeline: binarize at [`BINARIZE_THRESHOLD`], exact Euclidean distance transform of both
/// sides, `inside - outside`, normalize by the peak magnitude, encode to `[0, 255]`.
pub fn build_sdf(image: &GrayImage) -> GlyphResult<SdfImage> {
    build_sdf_with(image, BINARIZE_THRESHOLD)
}

/// [`build_sdf`] with an explicit binarization threshold.
#[tracing::instrument(skip(image), fields(size = %Size::of(image)))]
pub fn build_sdf_with(image: &GrayImage, threshold: u8) -> GlyphResult<SdfImage> {
    Ok(build_field(image, threshold)?.encode())
}

/// Float form of [`build_sdf_with`], before storage encoding.
pub fn build_field(image: &GrayImage, threshold: u8) -> GlyphResult<SignedField> {
    let size = Size::of(image);
    if size.is_empty() {
        return Err(GlyphError::validation(format!(
            "cannot build an SDF from an empty {size} image"
        )));
    }

    let mask = Mask::binarize(image, threshold);
    if !mask.has_boundary() {
        let side = if mask.foreground_count() == 0 {
            "background"
        } else {
            "foreground"
        };
        return Err(GlyphError::degenerate(format!(
            "{size} glyph is entirely {side} after thresholding at {threshold}"
        )));
    }

    let inside = distance_to_background(&mask)?;
    let outside = distance_to_foreground(&mask)?;
    let raw = inside.iter().zip(&outside).map(|(i, o)| i - o).collect();

    SignedField::normalize(size, raw)
}

#[cfg(test)]
#[path = "../../tests/unit/sdf/builder.rs"]
mod tests;
