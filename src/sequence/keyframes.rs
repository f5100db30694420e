use crate::foundation::core::{Size, ensure_same_size};
use crate::foundation::emotion::Emotion;
use crate::foundation::error::{GlyphError, GlyphResult};
use crate::sdf::field::SdfImage;

/// One named expression state of a glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
    pub label: Emotion,
    pub sdf: SdfImage,
}

impl Keyframe {
    pub fn new(label: Emotion, sdf: SdfImage) -> Self {
        Self { label, sdf }
    }
}

/// Ordered keyframes of one glyph; traversal follows insertion order.
///
/// Holds at least two keyframes, all of the same size. Labels may repeat (a sequence that
/// returns to its starting expression lists it twice).
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeSet {
    size: Size,
    frames: Vec<Keyframe>,
}

impl KeyframeSet {
    pub fn new(frames: Vec<Keyframe>) -> GlyphResult<Self> {
        if frames.len() < 2 {
            return Err(GlyphError::validation(format!(
                "a keyframe set needs at least 2 keyframes, got {}",
                frames.len()
            )));
        }
        let size = frames[0].sdf.size();
        for kf in &frames[1..] {
            ensure_same_size(size, kf.sdf.size())?;
        }
        Ok(Self { size, frames })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Keyframe] {
        &self.frames
    }

    /// Consecutive `(from, to)` pairs in traversal order.
    pub fn segments(&self) -> impl Iterator<Item = (&Keyframe, &Keyframe)> {
        self.frames.windows(2).map(|w| (&w[0], &w[1]))
    }

    pub fn labels(&self) -> Vec<Emotion> {
        self.frames.iter().map(|k| k.label).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/keyframes.rs"]
mod tests;
