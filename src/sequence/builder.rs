use image::RgbImage;

use crate::blend::interpolate::interpolate_sdf;
use crate::blend::warp::WarpExponent;
use crate::foundation::core::{Ratio, Size};
use crate::foundation::error::{GlyphError, GlyphResult};
use crate::sequence::keyframes::KeyframeSet;

/// Step and hold counts for one keyframe-to-keyframe segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SequenceParams {
    /// Interpolated frames per segment, both endpoints included. Must be `>= 2`.
    pub intervals: u32,
    /// Extra copies of the last frame of every segment.
    pub pause: u32,
}

impl Default for SequenceParams {
    fn default() -> Self {
        Self {
            intervals: 24,
            pause: 12,
        }
    }
}

impl SequenceParams {
    pub fn validate(&self) -> GlyphResult<()> {
        // `ratio = j / (intervals - 1)` is undefined for a single interval.
        if self.intervals < 2 {
            return Err(GlyphError::validation(format!(
                "intervals must be >= 2, got {}",
                self.intervals
            )));
        }
        Ok(())
    }

    pub fn frames_per_segment(&self) -> usize {
        self.intervals as usize + self.pause as usize
    }

    /// Total frame count for `keyframes` keyframes: `(keyframes - 1) * (intervals + pause)`.
    pub fn total_frames(&self, keyframes: usize) -> usize {
        keyframes.saturating_sub(1) * self.frames_per_segment()
    }
}

/// Ordered three-channel frames of one glyph animation.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSequence {
    pub size: Size,
    pub frames: Vec<RgbImage>,
}

impl FrameSequence {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Interpolate every consecutive keyframe pair with the warped SDF blend, holding the last
/// frame of each segment for `params.pause` extra frames.
#[tracing::instrument(skip(keyframes), fields(keyframes = keyframes.len(), size = %keyframes.size()))]
pub fn build_sequence(
    keyframes: &KeyframeSet,
    params: SequenceParams,
    p: WarpExponent,
) -> GlyphResult<FrameSequence> {
    params.validate()?;

    let mut frames = Vec::with_capacity(params.total_frames(keyframes.len()));
    for (from, to) in keyframes.segments() {
        for j in 0..params.intervals {
            let ratio = Ratio::step(j, params.intervals)?;
            frames.push(interpolate_sdf(&from.sdf, &to.sdf, ratio, p)?.to_rgb());
        }
        let last = frames
            .last()
            .cloned()
            .ok_or_else(|| GlyphError::validation("segment produced no frames"))?;
        for _ in 0..params.pause {
            frames.push(last.clone());
        }
        tracing::debug!(from = %from.label, to = %to.label, "segment done");
    }

    Ok(FrameSequence {
        size: keyframes.size(),
        frames,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/builder.rs"]
mod tests;
