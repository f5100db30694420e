use image::{GrayImage, Luma, RgbImage};

use crate::foundation::core::Size;

/// Sample value of a foreground mask pixel.
pub const FOREGROUND: u8 = 255;
/// Sample value of a background mask pixel.
pub const BACKGROUND: u8 = 0;

/// Single-channel image restricted to [`FOREGROUND`] / [`BACKGROUND`] samples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    image: GrayImage,
}

impl Mask {
    /// Build a mask by evaluating `is_foreground(x, y)` for every sample.
    pub fn from_fn(size: Size, mut is_foreground: impl FnMut(u32, u32) -> bool) -> Self {
        let image = GrayImage::from_fn(size.width, size.height, |x, y| {
            Luma([if is_foreground(x, y) {
                FOREGROUND
            } else {
                BACKGROUND
            }])
        });
        Self { image }
    }

    /// Threshold a grayscale image: foreground where the sample is strictly above `threshold`.
    pub fn binarize(image: &GrayImage, threshold: u8) -> Self {
        Self::from_fn(Size::of(image), |x, y| image.get_pixel(x, y)[0] > threshold)
    }

    pub fn size(&self) -> Size {
        Size::of(&self.image)
    }

    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.image.get_pixel(x, y)[0] == FOREGROUND
    }

    /// Row-major foreground flags.
    pub fn foreground_flags(&self) -> Vec<bool> {
        self.image.as_raw().iter().map(|&v| v == FOREGROUND).collect()
    }

    pub fn foreground_count(&self) -> usize {
        self.image
            .as_raw()
            .iter()
            .filter(|&&v| v == FOREGROUND)
            .count()
    }

    /// `true` when the mask contains both foreground and background samples.
    pub fn has_boundary(&self) -> bool {
        let fg = self.foreground_count();
        fg > 0 && fg < self.size().area()
    }

    pub fn as_image(&self) -> &GrayImage {
        &self.image
    }

    pub fn into_image(self) -> GrayImage {
        self.image
    }

    /// Broadcast to three identical channels for video frames.
    pub fn to_rgb(&self) -> RgbImage {
        RgbImage::from_fn(self.image.width(), self.image.height(), |x, y| {
            let v = self.image.get_pixel(x, y)[0];
            image::Rgb([v, v, v])
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sdf/mask.rs"]
mod tests;
