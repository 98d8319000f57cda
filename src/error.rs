// src/error.rs

//! Error type shared by every stage of the glyph pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the font, naming outputs, or writing images.
///
/// None of these are recovered locally; they surface to the caller and, in
/// the binary, terminate the run.
#[derive(Error, Debug)]
pub enum GlyphError {
    /// The font file is missing, unreadable, or not a font the backend can parse.
    #[error("failed to load font {path:?}: {reason}")]
    FontLoad { path: PathBuf, reason: String },

    /// Text could not be decoded, or a character cannot be used in a filename.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Canvas geometry or font size that no glyph can be drawn with.
    #[error("invalid render settings: {0}")]
    InvalidSettings(String),

    /// Reading input or writing an image failed.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GlyphError {
    pub fn font_load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        GlyphError::FontLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GlyphError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Folds an `image` encoding failure into the I/O variant.
pub(crate) fn from_image_error(path: impl Into<PathBuf>, err: image::ImageError) -> GlyphError {
    match err {
        image::ImageError::IoError(source) => GlyphError::io(path, source),
        other => GlyphError::io(path, io::Error::other(other)),
    }
}
