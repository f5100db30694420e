use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::blend::warp::WarpExponent;
use crate::foundation::core::{BINARIZE_THRESHOLD, DEFAULT_RESIZE, Fps};
use crate::foundation::emotion::Emotion;
use crate::foundation::error::{GlyphError, GlyphResult};
use crate::io::naming::{Layout, validate_letter};
use crate::sequence::builder::SequenceParams;

/// Letter-level threading for the batch jobs.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Threading {
    /// Process letters on a worker pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

/// Everything the batch jobs need, loaded once and passed down explicitly.
///
/// Every field has a default, so a JSON config only needs to list what it changes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub origin_dir: PathBuf,
    pub sdf_dir: PathBuf,
    pub video_dir: PathBuf,
    /// Letters processed by the batch jobs.
    pub letters: Vec<char>,
    /// Expressions converted from the hand-drawn sources.
    pub source_emotions: Vec<Emotion>,
    /// Keyframe traversal order for videos; repeats are allowed.
    pub emotions: Vec<Emotion>,
    pub fps: Fps,
    pub intervals: u32,
    pub pause: u32,
    /// Warp exponent of the keyframe morph videos.
    pub warp_exponent: WarpExponent,
    /// Warp exponent of the weighted multi-expression still mix.
    pub mix_warp_exponent: WarpExponent,
    pub threshold: u8,
    /// Square edge length used by the resize job.
    pub resize: u32,
    pub threading: Threading,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let sequence = SequenceParams::default();
        Self {
            origin_dir: PathBuf::from("origin"),
            sdf_dir: PathBuf::from("sdf"),
            video_dir: PathBuf::from("."),
            letters: ('A'..='Z').collect(),
            source_emotions: vec![
                Emotion::Happy,
                Emotion::Disgusted,
                Emotion::Angry,
                Emotion::Sad,
                Emotion::Surprised,
                Emotion::Fearful,
                Emotion::Neutral,
            ],
            emotions: vec![
                Emotion::Neutral,
                Emotion::Happy,
                Emotion::Disgusted,
                Emotion::Angry,
                Emotion::Sad,
                Emotion::Surprised,
                Emotion::Fearful,
                Emotion::Neutral,
            ],
            fps: Fps::DEFAULT,
            intervals: sequence.intervals,
            pause: sequence.pause,
            warp_exponent: WarpExponent::SEQUENCE,
            mix_warp_exponent: WarpExponent::WEIGHTED,
            threshold: BINARIZE_THRESHOLD,
            resize: DEFAULT_RESIZE,
            threading: Threading::default(),
        }
    }
}

impl PipelineConfig {
    /// Read a JSON config file.
    pub fn load(path: &Path) -> GlyphResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: PipelineConfig = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse config '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> GlyphResult<()> {
        if self.letters.is_empty() {
            return Err(GlyphError::validation("config lists no letters"));
        }
        for &letter in &self.letters {
            validate_letter(letter)?;
        }
        if self.source_emotions.is_empty() {
            return Err(GlyphError::validation("config lists no source emotions"));
        }
        if self.emotions.len() < 2 {
            return Err(GlyphError::validation(
                "video keyframe order needs at least 2 emotions",
            ));
        }
        self.sequence().validate()?;
        if self.resize == 0 {
            return Err(GlyphError::validation("resize must be > 0"));
        }
        if self.threading.threads == Some(0) {
            return Err(GlyphError::validation(
                "threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }

    pub fn sequence(&self) -> SequenceParams {
        SequenceParams {
            intervals: self.intervals,
            pause: self.pause,
        }
    }

    pub fn layout(&self) -> Layout {
        Layout {
            origin_dir: self.origin_dir.clone(),
            sdf_dir: self.sdf_dir.clone(),
            video_dir: self.video_dir.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/config.rs"]
mod tests;
