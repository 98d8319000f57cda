// src/imaging/provider.rs

//! The imaging capability the glyph renderer is built against.
//!
//! This trait is the seam between the dataset pipeline and whatever library
//! actually parses fonts and rasterizes text. Backends are chosen when the
//! renderer is constructed, never probed for at runtime.

use crate::color::Color;
use crate::error::GlyphError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-left corner of the text line, in canvas pixels.
///
/// The baseline sits `ascent` pixels below `y`, so a negative `y` shifts the
/// glyph up to compensate for the space reserved above tall ascenders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextOrigin {
    pub x: i32,
    pub y: i32,
}

impl TextOrigin {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Default for TextOrigin {
    fn default() -> Self {
        // Centers the ink of a 64px glyph on a 64x64 canvas.
        TextOrigin::new(0, -12)
    }
}

/// Imaging backend trait.
///
/// Implementors provide:
/// - Font loading from a file at a pixel size
/// - Canvas allocation filled with a background color
/// - Text drawing at an origin in a foreground color
/// - Persisting a canvas as an image file
pub trait ImagingProvider {
    /// Loaded font handle, shared read-only across every draw in a run.
    type Font;

    /// Raster surface that drawing targets.
    type Canvas;

    /// Load the font at `path`, scaled so that one em is `size_px` pixels.
    ///
    /// # Errors
    /// [`GlyphError::FontLoad`] if the file is missing or cannot be parsed.
    fn load_font(&self, path: &Path, size_px: f32) -> Result<Self::Font, GlyphError>;

    /// Allocate a `width` x `height` canvas filled with `background`.
    fn new_canvas(&self, width: u32, height: u32, background: Color) -> Self::Canvas;

    /// Draw `text` onto `canvas` with its line box starting at `origin`.
    ///
    /// Ink falling outside the canvas is clipped.
    fn draw_text(
        &self,
        canvas: &mut Self::Canvas,
        origin: TextOrigin,
        text: &str,
        color: Color,
        font: &Self::Font,
    ) -> Result<(), GlyphError>;

    /// Write `canvas` to `path` as PNG, replacing any existing file.
    fn save(&self, canvas: &Self::Canvas, path: &Path) -> Result<(), GlyphError>;

    /// Width and height of `canvas` in pixels.
    fn dimensions(&self, canvas: &Self::Canvas) -> (u32, u32);
}
