use image::{GrayImage, Luma};

use crate::foundation::core::Size;
use crate::foundation::error::{GlyphError, GlyphResult};

/// Signed distance samples normalized to `[-1, 1]`, positive inside the foreground.
#[derive(Clone, Debug, PartialEq)]
pub struct SignedField {
    size: Size,
    values: Vec<f32>,
}

impl SignedField {
    /// Wrap raw signed distances and divide them by their maximum magnitude.
    ///
    /// Fails with [`GlyphError::DegenerateField`] when every sample is zero.
    pub fn normalize(size: Size, raw: Vec<f32>) -> GlyphResult<Self> {
        if raw.len() != size.area() {
            return Err(GlyphError::validation(format!(
                "field holds {} samples, expected {} for {size}",
                raw.len(),
                size.area()
            )));
        }
        let peak = max_abs(&raw);
        if !peak.is_finite() || peak == 0.0 {
            return Err(GlyphError::degenerate(format!(
                "cannot normalize a {size} field with peak magnitude {peak}"
            )));
        }
        let values = raw.into_iter().map(|v| v / peak).collect();
        Ok(Self { size, values })
    }

    /// Re-derive the `[-1, 1]` field from its 8-bit storage form.
    ///
    /// The result is not re-normalized; rounding in the encoding is kept as is.
    pub fn decode(sdf: &SdfImage) -> Self {
        let values = sdf
            .as_image()
            .as_raw()
            .iter()
            .map(|&b| f32::from(b) / 255.0 * 2.0 - 1.0)
            .collect();
        Self {
            size: sdf.size(),
            values,
        }
    }

    /// Map `[-1, 1]` onto `[0, 255]` via `(s + 1) / 2 * 255`, rounded to nearest.
    pub fn encode(&self) -> SdfImage {
        SdfImage(GrayImage::from_fn(self.size.width, self.size.height, |x, y| {
            Luma([encode_sample(self.get(x, y))])
        }))
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.values[y as usize * self.size.width as usize + x as usize]
    }

    pub fn max_abs(&self) -> f32 {
        max_abs(&self.values)
    }
}

fn encode_sample(s: f32) -> u8 {
    ((s + 1.0) * 0.5 * 255.0).round().clamp(0.0, 255.0) as u8
}

fn max_abs(values: &[f32]) -> f32 {
    values.iter().fold(0.0f32, |m, v| m.max(v.abs()))
}

/// 8-bit storage encoding of a [`SignedField`]: `0` is `-1`, `255` is `+1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SdfImage(GrayImage);

impl SdfImage {
    /// Treat an already-encoded grayscale raster (e.g. read back from disk) as an SDF.
    pub fn from_image(image: GrayImage) -> Self {
        Self(image)
    }

    pub fn size(&self) -> Size {
        Size::of(&self.0)
    }

    pub fn as_image(&self) -> &GrayImage {
        &self.0
    }

    pub fn into_image(self) -> GrayImage {
        self.0
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        let Luma([v]) = *self.0.get_pixel(x, y);
        v
    }

    /// Samples recentered to `byte / 255 - 0.5`, i.e. roughly `[-0.5, 0.5]`.
    pub fn centered(&self) -> impl Iterator<Item = f32> + '_ {
        self.0.as_raw().iter().map(|&b| centered(b))
    }
}

/// Centered distance of one stored sample.
pub fn centered(byte: u8) -> f32 {
    f32::from(byte) / 255.0 - 0.5
}

#[cfg(test)]
#[path = "../../tests/unit/sdf/field.rs"]
mod tests;
