use image::GrayImage;

use crate::blend::warp::WarpExponent;
use crate::foundation::core::{Ratio, Size, ensure_same_size};
use crate::foundation::error::GlyphResult;
use crate::sdf::field::{SdfImage, centered};
use crate::sdf::mask::Mask;

/// Threshold of the plain linear blend on normalized `[0, 1]` gray.
pub const LINEAR_THRESHOLD: f32 = 0.5;

/// Which interpolation rule to use for a pair of inputs.
///
/// The two rules are numerically distinct and are not interchangeable:
/// [`BlendVariant::Linear`] suits final raster images, [`BlendVariant::WarpedSdf`] suits stored
/// SDFs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BlendVariant {
    /// Mix normalized gray values and keep samples strictly above [`LINEAR_THRESHOLD`].
    Linear,
    /// Mix power-warped centered distances and keep samples at or above zero.
    WarpedSdf(WarpExponent),
}

impl Default for BlendVariant {
    fn default() -> Self {
        Self::WarpedSdf(WarpExponent::default())
    }
}

/// Dispatch to the selected variant. Both inputs must share dimensions.
pub fn blend(
    variant: BlendVariant,
    a: &GrayImage,
    b: &GrayImage,
    ratio: Ratio,
) -> GlyphResult<Mask> {
    match variant {
        BlendVariant::Linear => blend_linear(a, b, ratio),
        BlendVariant::WarpedSdf(p) => warped_mix(a, b, ratio, p),
    }
}

/// Still-image blend: `(1 - r) * a + r * b` on `[0, 1]` gray, binarized at `0.5`.
pub fn blend_linear(a: &GrayImage, b: &GrayImage, ratio: Ratio) -> GlyphResult<Mask> {
    let size = Size::of(a);
    ensure_same_size(size, Size::of(b))?;
    let r = ratio.get();

    Ok(Mask::from_fn(size, |x, y| {
        let ga = f32::from(a.get_pixel(x, y)[0]) / 255.0;
        let gb = f32::from(b.get_pixel(x, y)[0]) / 255.0;
        (1.0 - r) * ga + r * gb > LINEAR_THRESHOLD
    }))
}

/// Animated-transition blend of two SDFs.
///
/// Each stored sample is recentered to `byte / 255 - 0.5`, warped with `p`, mixed as
/// `(1 - r) * a + r * b`, and kept as foreground where the mix is `>= 0`.
pub fn interpolate_sdf(
    a: &SdfImage,
    b: &SdfImage,
    ratio: Ratio,
    p: WarpExponent,
) -> GlyphResult<Mask> {
    warped_mix(a.as_image(), b.as_image(), ratio, p)
}

/// Foreground test of a single SDF under the same sign rule as [`interpolate_sdf`].
pub fn binarize_sdf(sdf: &SdfImage) -> Mask {
    Mask::from_fn(sdf.size(), |x, y| centered(sdf.get(x, y)) >= 0.0)
}

fn warped_mix(a: &GrayImage, b: &GrayImage, ratio: Ratio, p: WarpExponent) -> GlyphResult<Mask> {
    let size = Size::of(a);
    ensure_same_size(size, Size::of(b))?;
    let r = ratio.get();

    Ok(Mask::from_fn(size, |x, y| {
        let wa = p.apply(centered(a.get_pixel(x, y)[0]));
        let wb = p.apply(centered(b.get_pixel(x, y)[0]));
        (1.0 - r) * wa + r * wb >= 0.0
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/blend/interpolate.rs"]
mod tests;
