// src/imaging/headless_provider.rs

//! Headless backend: draws a deterministic block per character instead of
//! real glyph shapes. The font file must still exist, but it is never parsed.

use super::provider::{ImagingProvider, TextOrigin};
use super::{blend_pixel, new_rgb_canvas, save_png, RgbCanvas};
use crate::color::Color;
use crate::error::GlyphError;
use std::fs;
use std::path::Path;

/// Fraction of the em used as ascent for block placement.
const HEADLESS_ASCENT: f32 = 0.75;

#[derive(Debug, Clone, Copy)]
pub struct HeadlessFont {
    size_px: f32,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessProvider;

impl HeadlessProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ImagingProvider for HeadlessProvider {
    type Font = HeadlessFont;
    type Canvas = RgbCanvas;

    fn load_font(&self, path: &Path, size_px: f32) -> Result<HeadlessFont, GlyphError> {
        let meta = fs::metadata(path).map_err(|e| GlyphError::font_load(path, e))?;
        if !meta.is_file() {
            return Err(GlyphError::font_load(path, "not a regular file"));
        }
        Ok(HeadlessFont { size_px })
    }

    fn new_canvas(&self, width: u32, height: u32, background: Color) -> RgbCanvas {
        new_rgb_canvas(width, height, background)
    }

    /// Each character becomes a half-em square sitting on the baseline, shaded
    /// by its code point so distinct characters produce distinct images.
    /// Whitespace draws nothing.
    fn draw_text(
        &self,
        canvas: &mut RgbCanvas,
        origin: TextOrigin,
        text: &str,
        color: Color,
        font: &HeadlessFont,
    ) -> Result<(), GlyphError> {
        let side = (font.size_px / 2.0).round().max(1.0) as i64;
        let baseline = (origin.y as f32 + font.size_px * HEADLESS_ASCENT).round() as i64;
        let fg = color.to_rgb();
        let mut pen_x = origin.x as i64;

        for ch in text.chars() {
            if !ch.is_whitespace() {
                let coverage = 0.5 + (ch as u32 % 128) as f32 / 254.0;
                for y in (baseline - side)..baseline {
                    for x in pen_x..(pen_x + side) {
                        blend_pixel(canvas, x, y, fg, coverage);
                    }
                }
            }
            pen_x += side;
        }
        Ok(())
    }

    fn save(&self, canvas: &RgbCanvas, path: &Path) -> Result<(), GlyphError> {
        save_png(canvas, path)
    }

    fn dimensions(&self, canvas: &RgbCanvas) -> (u32, u32) {
        canvas.dimensions()
    }
}
