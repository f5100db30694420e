//! Batch jobs over the configured folders.
//!
//! Each job is one run-to-completion unit per letter: every error aborts that letter only, and
//! is reported alongside the letters that succeeded.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::blend::interpolate::blend_linear;
use crate::blend::mix::mix_weighted_owned;
use crate::encode::ffmpeg::encode;
use crate::foundation::core::Ratio;
use crate::foundation::emotion::Emotion;
use crate::foundation::error::{GlyphError, GlyphResult};
use crate::io::naming::GlyphKey;
use crate::io::raster::{read_gray, write_gray};
use crate::pipeline::config::{PipelineConfig, Threading};
use crate::sdf::builder::build_sdf_with;
use crate::sdf::field::SdfImage;
use crate::sdf::mask::Mask;
use crate::sequence::builder::build_sequence;
use crate::sequence::keyframes::{Keyframe, KeyframeSet};

/// Outcome of one letter in a batch job.
#[derive(Debug)]
pub struct LetterReport<T> {
    pub letter: char,
    pub outcome: GlyphResult<T>,
}

impl<T> LetterReport<T> {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Convert every configured source expression of `letter` into an SDF file.
///
/// Returns the written paths in `source_emotions` order. Stops at the first failure; SDFs already
/// written for earlier expressions of the letter are kept.
#[tracing::instrument(skip(cfg))]
pub fn convert_letter(cfg: &PipelineConfig, letter: char) -> GlyphResult<Vec<PathBuf>> {
    let layout = cfg.layout();
    let mut written = Vec::with_capacity(cfg.source_emotions.len());
    for &emotion in &cfg.source_emotions {
        let key = GlyphKey::new(letter, emotion)?;
        let src = read_gray(&layout.source_path(key))?;
        let sdf = build_sdf_with(&src, cfg.threshold)?;
        let out = layout.sdf_path(key);
        write_gray(&out, sdf.as_image())?;
        tracing::info!(glyph = %key, path = %out.display(), "wrote sdf");
        written.push(out);
    }
    Ok(written)
}

/// [`convert_letter`] for every configured letter.
pub fn convert_all(cfg: &PipelineConfig) -> GlyphResult<Vec<LetterReport<Vec<PathBuf>>>> {
    for_each_letter(cfg, |letter| convert_letter(cfg, letter))
}

/// Plain linear blend of two still images, written as a black/white raster.
///
/// Nothing is written when the inputs cannot be read or differ in size.
#[tracing::instrument(skip(ratio), fields(ratio = ratio.get()))]
pub fn blend_files(a: &Path, b: &Path, ratio: Ratio, out: &Path) -> GlyphResult<Mask> {
    let img_a = read_gray(a)?;
    let img_b = read_gray(b)?;
    let mask = blend_linear(&img_a, &img_b, ratio)?;
    write_gray(out, mask.as_image())?;
    tracing::info!(path = %out.display(), "wrote blend");
    Ok(mask)
}

/// Read one stored SDF.
pub fn load_sdf(cfg: &PipelineConfig, key: GlyphKey) -> GlyphResult<SdfImage> {
    read_gray(&cfg.layout().sdf_path(key)).map(SdfImage::from_image)
}

/// Assemble the keyframe set of `letter` in the configured `emotions` order.
pub fn load_keyframes(cfg: &PipelineConfig, letter: char) -> GlyphResult<KeyframeSet> {
    let frames = cfg
        .emotions
        .iter()
        .map(|&emotion| {
            let key = GlyphKey::new(letter, emotion)?;
            Ok(Keyframe::new(emotion, load_sdf(cfg, key)?))
        })
        .collect::<GlyphResult<Vec<_>>>()?;
    KeyframeSet::new(frames)
}

/// Build and encode the morph video of one letter. Returns the video path.
#[tracing::instrument(skip(cfg))]
pub fn render_letter_video(cfg: &PipelineConfig, letter: char) -> GlyphResult<PathBuf> {
    let keyframes = load_keyframes(cfg, letter)?;
    let frames = build_sequence(&keyframes, cfg.sequence(), cfg.warp_exponent)?;
    let out = cfg.layout().video_path(letter);
    encode(&frames, cfg.fps, &out)?;
    Ok(out)
}

/// [`render_letter_video`] for every configured letter.
pub fn render_videos(cfg: &PipelineConfig) -> GlyphResult<Vec<LetterReport<PathBuf>>> {
    for_each_letter(cfg, |letter| render_letter_video(cfg, letter))
}

/// Blend several stored expressions of `letter` by relative weight into one still mask.
///
/// Uses `cfg.mix_warp_exponent`, not the video exponent.
#[tracing::instrument(skip(cfg, weights, out))]
pub fn mix_still(
    cfg: &PipelineConfig,
    letter: char,
    weights: &[(Emotion, f32)],
    out: &Path,
) -> GlyphResult<Mask> {
    let layers = weights
        .iter()
        .map(|&(emotion, w)| Ok((w, load_sdf(cfg, GlyphKey::new(letter, emotion)?)?)))
        .collect::<GlyphResult<Vec<_>>>()?;
    let mask = mix_weighted_owned(&layers, cfg.mix_warp_exponent)?;
    write_gray(out, mask.as_image())?;
    tracing::info!(path = %out.display(), "wrote mix");
    Ok(mask)
}

fn for_each_letter<T, F>(cfg: &PipelineConfig, job: F) -> GlyphResult<Vec<LetterReport<T>>>
where
    T: Send,
    F: Fn(char) -> GlyphResult<T> + Sync,
{
    cfg.validate()?;

    let run = |letter: char| {
        let outcome = job(letter);
        if let Err(e) = &outcome {
            tracing::warn!(%letter, error = %e, "letter failed");
        }
        LetterReport { letter, outcome }
    };

    if !cfg.threading.parallel {
        return Ok(cfg.letters.iter().map(|&l| run(l)).collect());
    }

    let pool = build_thread_pool(&cfg.threading)?;
    Ok(pool.install(|| cfg.letters.par_iter().map(|&l| run(l)).collect()))
}

fn build_thread_pool(threading: &Threading) -> GlyphResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threading.threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| GlyphError::Other(anyhow::Error::new(e).context("build rayon thread pool")))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/jobs.rs"]
mod tests;
