use crate::foundation::error::{GlyphError, GlyphResult};

/// Exponent of the power warp applied to negative (background) distances before blending.
///
/// Valid range is `[0.6, 0.7]`. Values below one compress the background falloff relative to
/// the foreground side, which keeps morphs from snapping between shapes.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct WarpExponent(f32);

impl WarpExponent {
    pub const MIN: f32 = 0.6;
    pub const MAX: f32 = 0.7;

    /// Exponent used by the frame sequencing pipeline.
    pub const SEQUENCE: WarpExponent = WarpExponent(0.65);
    /// Exponent used by the interactive weighted renderer.
    pub const WEIGHTED: WarpExponent = WarpExponent(0.7);

    pub fn new(p: f32) -> GlyphResult<Self> {
        if !p.is_finite() || !(Self::MIN..=Self::MAX).contains(&p) {
            return Err(GlyphError::validation(format!(
                "warp exponent must be within [{}, {}], got {p}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(p))
    }

    pub fn get(self) -> f32 {
        self.0
    }

    /// `d` when non-negative, `-(|d|^p)` otherwise.
    pub fn apply(self, d: f32) -> f32 {
        if d >= 0.0 { d } else { -(-d).powf(self.0) }
    }
}

impl Default for WarpExponent {
    fn default() -> Self {
        Self::SEQUENCE
    }
}

impl TryFrom<f32> for WarpExponent {
    type Error = GlyphError;

    fn try_from(p: f32) -> GlyphResult<Self> {
        Self::new(p)
    }
}

impl From<WarpExponent> for f32 {
    fn from(p: WarpExponent) -> f32 {
        p.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blend/warp.rs"]
mod tests;
