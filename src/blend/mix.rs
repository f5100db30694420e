use crate::blend::warp::WarpExponent;
use crate::foundation::core::ensure_same_size;
use crate::foundation::error::{GlyphError, GlyphResult};
use crate::sdf::field::{SdfImage, centered};
use crate::sdf::mask::Mask;

/// Weighted warp blend over any number of SDFs.
///
/// Weights are relative: they must be finite and non-negative with a positive sum. A sample is
/// foreground where `sum(w_i * warp(d_i)) >= 0`. Two inputs weighted `(1 - r, r)` give the same
/// mask as [`interpolate_sdf`](crate::interpolate_sdf).
pub fn mix_weighted(layers: &[(f32, &SdfImage)], p: WarpExponent) -> GlyphResult<Mask> {
    let Some((_, first)) = layers.first() else {
        return Err(GlyphError::validation("weighted mix needs at least one layer"));
    };
    let size = first.size();

    let mut total = 0.0f32;
    for (w, sdf) in layers {
        if !w.is_finite() || *w < 0.0 {
            return Err(GlyphError::validation(format!(
                "mix weights must be finite and >= 0, got {w}"
            )));
        }
        ensure_same_size(size, sdf.size())?;
        total += w;
    }
    if total <= 0.0 {
        return Err(GlyphError::validation("mix weights must not all be zero"));
    }

    Ok(Mask::from_fn(size, |x, y| {
        let mut acc = 0.0f32;
        for (w, sdf) in layers {
            acc += w * p.apply(centered(sdf.get(x, y)));
        }
        acc >= 0.0
    }))
}

/// Convenience wrapper for owned layer lists.
pub fn mix_weighted_owned(layers: &[(f32, SdfImage)], p: WarpExponent) -> GlyphResult<Mask> {
    let refs: Vec<(f32, &SdfImage)> = layers.iter().map(|(w, s)| (*w, s)).collect();
    mix_weighted(&refs, p)
}

#[cfg(test)]
#[path = "../../tests/unit/blend/mix.rs"]
mod tests;
