use std::fmt;
use std::path::{Path, PathBuf};

use crate::foundation::emotion::Emotion;
use crate::foundation::error::{GlyphError, GlyphResult};

/// Identifies one rendition of a glyph: a letter drawn in one expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlyphKey {
    pub letter: char,
    pub emotion: Emotion,
}

impl GlyphKey {
    pub fn new(letter: char, emotion: Emotion) -> GlyphResult<Self> {
        validate_letter(letter)?;
        Ok(Self { letter, emotion })
    }

    /// `{letter}_{emotion}`, the stem of SDF files.
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.letter, self.emotion.name())
    }

    /// `{letter} {label}`, the stem of hand-drawn source files.
    pub fn source_stem(&self) -> String {
        format!("{} {}", self.letter, self.emotion.source_label())
    }

    /// Parse either `{letter}_{emotion}` or `{letter} {label}`.
    pub fn parse_stem(stem: &str) -> GlyphResult<Self> {
        let (letter, emotion) = stem
            .split_once('_')
            .or_else(|| stem.split_once(' '))
            .ok_or_else(|| {
                GlyphError::validation(format!(
                    "'{stem}' does not follow '{{letter}}_{{emotion}}' or '{{letter}} {{label}}'"
                ))
            })?;

        let mut chars = letter.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(GlyphError::validation(format!(
                "'{stem}' must start with a single-character letter"
            )));
        };
        Self::new(c, emotion.parse()?)
    }
}

impl fmt::Display for GlyphKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_stem())
    }
}

pub fn validate_letter(letter: char) -> GlyphResult<()> {
    if !letter.is_ascii_alphanumeric() {
        return Err(GlyphError::validation(format!(
            "glyph letter must be ASCII alphanumeric, got '{letter}'"
        )));
    }
    Ok(())
}

/// Where each pipeline stage reads and writes its files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Hand-drawn sources: `{origin_dir}/{letter}/{letter} {label}.png`.
    pub origin_dir: PathBuf,
    /// SDFs: `{sdf_dir}/{letter}_{emotion}.png`.
    pub sdf_dir: PathBuf,
    /// Videos: `{video_dir}/output_{letter}.mp4`.
    pub video_dir: PathBuf,
}

impl Layout {
    pub fn source_path(&self, key: GlyphKey) -> PathBuf {
        self.origin_dir
            .join(key.letter.to_string())
            .join(format!("{}.png", key.source_stem()))
    }

    pub fn sdf_path(&self, key: GlyphKey) -> PathBuf {
        self.sdf_dir.join(format!("{}.png", key.file_stem()))
    }

    pub fn video_path(&self, letter: char) -> PathBuf {
        self.video_dir.join(format!("output_{letter}.mp4"))
    }
}

/// `true` for `.png` / `.jpg` / `.jpeg` files (case-insensitive).
pub fn is_raster_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            e == "png" || e == "jpg" || e == "jpeg"
        })
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/io/naming.rs"]
mod tests;
