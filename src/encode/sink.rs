use image::RgbImage;

use crate::foundation::core::{Fps, Size, ensure_same_size};
use crate::foundation::error::{GlyphError, GlyphResult};
use crate::sequence::builder::FrameSequence;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame size; every pushed frame must match it.
    pub size: Size,
    pub fps: Fps,
}

/// Consumer of frames in playback order.
///
/// Ordering contract: `push_frame` is called with strictly increasing indices, starting at 0.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> GlyphResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: u64, frame: &RgbImage) -> GlyphResult<()>;
    /// Called once after the last frame.
    fn end(&mut self) -> GlyphResult<()>;
}

/// Stream a whole sequence through `sink`.
///
/// Fails before `begin` on an empty sequence, and on the first frame whose size differs from
/// the sequence size.
pub fn write_sequence(
    sink: &mut dyn FrameSink,
    seq: &FrameSequence,
    fps: Fps,
) -> GlyphResult<()> {
    if seq.is_empty() {
        return Err(GlyphError::validation("cannot encode an empty frame sequence"));
    }
    sink.begin(SinkConfig {
        size: seq.size,
        fps,
    })?;
    for (idx, frame) in seq.frames.iter().enumerate() {
        ensure_same_size(seq.size, Size::of(frame))?;
        sink.push_frame(idx as u64, frame)?;
    }
    sink.end()
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<RgbImage>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    pub fn frames(&self) -> &[RgbImage] {
        &self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> GlyphResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, frame: &RgbImage) -> GlyphResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| GlyphError::encode("in-memory sink not started"))?;
        if idx != self.frames.len() as u64 {
            return Err(GlyphError::encode(format!(
                "in-memory sink expected frame {}, got {idx}",
                self.frames.len()
            )));
        }
        ensure_same_size(cfg.size, Size::of(frame))?;
        self.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> GlyphResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
