//! glyph-morph turns hand-drawn letter glyphs into signed distance fields and morphs between
//! expression styles.
//!
//! # Pipeline overview
//!
//! 1. **Build**: `GrayImage -> SdfImage` (threshold, exact Euclidean distance transform of both
//!    sides, normalize to `[-1, 1]`, store as 8-bit)
//! 2. **Interpolate**: `(SdfImage, SdfImage, Ratio) -> Mask` (power-warped distance blend, sign
//!    test), or the plain linear blend for still images
//! 3. **Sequence**: `KeyframeSet -> FrameSequence` (interpolated segments plus hold frames)
//! 4. **Encode**: stream frames to the system `ffmpeg` binary for H.264 MP4 output
//!
//! Steps 1-3 never touch the filesystem; file naming, folder layout and batch jobs live in
//! [`PipelineConfig`] and the job functions ([`convert_letter`], [`render_letter_video`], ...).
#![forbid(unsafe_code)]

mod blend;
mod encode;
mod foundation;
mod io;
mod pipeline;
mod sdf;
mod sequence;

pub use blend::interpolate::{
    BlendVariant, LINEAR_THRESHOLD, binarize_sdf, blend, blend_linear, interpolate_sdf,
};
pub use blend::mix::{mix_weighted, mix_weighted_owned};
pub use blend::warp::WarpExponent;
pub use encode::ffmpeg::{
    FfmpegSink, FfmpegSinkOpts, encode, ensure_parent_dir, is_ffmpeg_on_path,
    validate_sink_config,
};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig, write_sequence};
pub use foundation::core::{
    BINARIZE_THRESHOLD, DEFAULT_RESIZE, Fps, Ratio, Size, ensure_same_size,
};
pub use foundation::emotion::Emotion;
pub use foundation::error::{GlyphError, GlyphResult};
pub use io::naming::{GlyphKey, Layout, is_raster_file, validate_letter};
pub use io::raster::{read_gray, write_gray};
pub use io::resize::{resize_folder, resize_image};
pub use pipeline::config::{PipelineConfig, Threading};
pub use pipeline::jobs::{
    LetterReport, blend_files, convert_all, convert_letter, load_keyframes, load_sdf, mix_still,
    render_letter_video, render_videos,
};
pub use sdf::builder::{build_field, build_sdf, build_sdf_with};
pub use sdf::distance::{distance_to_background, distance_to_foreground, distance_to_seeds};
pub use sdf::field::{SdfImage, SignedField, centered};
pub use sdf::mask::{BACKGROUND, FOREGROUND, Mask};
pub use sequence::builder::{FrameSequence, SequenceParams, build_sequence};
pub use sequence::keyframes::{Keyframe, KeyframeSet};

pub use image::{GrayImage, RgbImage};
