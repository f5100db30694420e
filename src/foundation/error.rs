use std::path::PathBuf;

use crate::foundation::core::Size;

/// Result alias used across the crate.
pub type GlyphResult<T> = Result<T, GlyphError>;

/// Error taxonomy for the glyph pipeline.
///
/// Every variant aborts the current unit of work (one letter, or one blended pair).
#[derive(thiserror::Error, Debug)]
pub enum GlyphError {
    /// Two images that must share geometry do not.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Size of the reference image.
        expected: Size,
        /// Size of the offending image.
        got: Size,
    },

    /// The signed field has no boundary (uniform input) and cannot be normalized.
    #[error("degenerate field: {0}")]
    DegenerateField(String),

    /// An input raster is missing or cannot be decoded.
    #[error("input error: '{}': {reason}", path.display())]
    Input {
        /// Offending file.
        path: PathBuf,
        /// Decoder or filesystem message.
        reason: String,
    },

    /// A parameter or configuration value is out of range.
    #[error("validation error: {0}")]
    Validation(String),

    /// The video encoder failed or could not be started.
    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlyphError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateField(msg.into())
    }

    pub fn input(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::Input {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn dimension_mismatch(expected: Size, got: Size) -> Self {
        Self::DimensionMismatch { expected, got }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
