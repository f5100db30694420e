use std::fmt;
use std::str::FromStr;

use crate::foundation::error::GlyphError;

/// Facial-expression style a glyph was drawn in.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Neutral,
    Happy,
    Disgusted,
    Angry,
    Sad,
    Surprised,
    Fearful,
}

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Neutral,
        Emotion::Happy,
        Emotion::Disgusted,
        Emotion::Angry,
        Emotion::Sad,
        Emotion::Surprised,
        Emotion::Fearful,
    ];

    /// English name used in SDF file stems.
    pub fn name(self) -> &'static str {
        match self {
            Emotion::Neutral => "neutral",
            Emotion::Happy => "happy",
            Emotion::Disgusted => "disgusted",
            Emotion::Angry => "angry",
            Emotion::Sad => "sad",
            Emotion::Surprised => "surprised",
            Emotion::Fearful => "fearful",
        }
    }

    /// Label used in the hand-drawn source folders.
    pub fn source_label(self) -> &'static str {
        match self {
            Emotion::Neutral => "中立",
            Emotion::Happy => "高兴",
            Emotion::Disgusted => "恶心",
            Emotion::Angry => "生气",
            Emotion::Sad => "伤心",
            Emotion::Surprised => "惊讶",
            Emotion::Fearful => "惊恐",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Emotion {
    type Err = GlyphError;

    /// Accepts the English name (any case) or the source-folder label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Emotion::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s) || e.source_label() == s)
            .ok_or_else(|| GlyphError::validation(format!("unknown emotion '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/emotion.rs"]
mod tests;
