use std::fmt;

use image::{ImageBuffer, Pixel};

use crate::foundation::error::{GlyphError, GlyphResult};

/// Default binarization threshold on the 0-255 scale (foreground is strictly above it).
pub const BINARIZE_THRESHOLD: u8 = 127;

/// Default square edge length that input rasters are resized to.
pub const DEFAULT_RESIZE: u32 = 512;

/// Width and height of a raster, in samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of<P: Pixel>(img: &ImageBuffer<P, Vec<P::Subpixel>>) -> Self {
        let (width, height) = img.dimensions();
        Self { width, height }
    }

    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Fails with [`GlyphError::DimensionMismatch`] unless `got == expected`.
pub fn ensure_same_size(expected: Size, got: Size) -> GlyphResult<()> {
    if expected != got {
        return Err(GlyphError::dimension_mismatch(expected, got));
    }
    Ok(())
}

/// Mix ratio in `[0, 1]`; `0` selects the first input, `1` the second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Ratio(f32);

impl Ratio {
    pub const ZERO: Ratio = Ratio(0.0);
    pub const ONE: Ratio = Ratio(1.0);

    pub fn new(value: f32) -> GlyphResult<Self> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(GlyphError::validation(format!(
                "mix ratio must be within [0, 1], got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Ratio of step `j` out of `steps` evenly spaced samples, endpoints included.
    ///
    /// `steps` must be at least 2.
    pub fn step(j: u32, steps: u32) -> GlyphResult<Self> {
        if steps < 2 {
            return Err(GlyphError::validation(format!(
                "interpolation needs at least 2 steps, got {steps}"
            )));
        }
        if j >= steps {
            return Err(GlyphError::validation(format!(
                "step {j} is out of range for {steps} steps"
            )));
        }
        Ok(Self(j as f32 / (steps - 1) as f32))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

/// Integer output frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Fps(u32);

impl Fps {
    pub const DEFAULT: Fps = Fps(24);

    pub fn new(fps: u32) -> GlyphResult<Self> {
        if fps == 0 {
            return Err(GlyphError::validation("fps must be > 0"));
        }
        Ok(Self(fps))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for Fps {
    type Error = GlyphError;

    fn try_from(fps: u32) -> GlyphResult<Self> {
        Self::new(fps)
    }
}

impl From<Fps> for u32 {
    fn from(fps: Fps) -> u32 {
        fps.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
