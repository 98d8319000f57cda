// src/imaging/fontdue_provider.rs

//! Secondary backend that rasterizes through `fontdue`.

use super::provider::{ImagingProvider, TextOrigin};
use super::{blend_pixel, new_rgb_canvas, save_png, RgbCanvas};
use crate::color::Color;
use crate::error::GlyphError;
use fontdue::FontSettings;
use log::{debug, trace};
use std::fs;
use std::path::Path;

pub struct FontdueFont {
    font: fontdue::Font,
    size_px: f32,
    ascent_px: f32,
}

impl FontdueFont {
    pub fn ascent_px(&self) -> f32 {
        self.ascent_px
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FontdueProvider;

impl FontdueProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ImagingProvider for FontdueProvider {
    type Font = FontdueFont;
    type Canvas = RgbCanvas;

    fn load_font(&self, path: &Path, size_px: f32) -> Result<FontdueFont, GlyphError> {
        let data = fs::read(path).map_err(|e| GlyphError::font_load(path, e))?;
        let settings = FontSettings {
            scale: size_px,
            ..FontSettings::default()
        };
        let font = fontdue::Font::from_bytes(data, settings)
            .map_err(|e| GlyphError::font_load(path, e))?;

        // Fonts without horizontal metrics put the baseline one em below the top.
        let ascent_px = font
            .horizontal_line_metrics(size_px)
            .map(|m| m.ascent)
            .unwrap_or(size_px);
        debug!(
            "FontdueProvider: loaded {:?} ({} glyphs, ascent {:.2}px)",
            path,
            font.glyph_count(),
            ascent_px
        );

        Ok(FontdueFont {
            font,
            size_px,
            ascent_px,
        })
    }

    fn new_canvas(&self, width: u32, height: u32, background: Color) -> RgbCanvas {
        new_rgb_canvas(width, height, background)
    }

    fn draw_text(
        &self,
        canvas: &mut RgbCanvas,
        origin: TextOrigin,
        text: &str,
        color: Color,
        font: &FontdueFont,
    ) -> Result<(), GlyphError> {
        let baseline = (origin.y as f32 + font.ascent_px).round() as i64;
        let mut pen_x = origin.x as f32;
        let fg = color.to_rgb();

        for ch in text.chars() {
            let (metrics, bitmap) = font.font.rasterize(ch, font.size_px);
            let left = pen_x.round() as i64 + metrics.xmin as i64;
            let top = baseline - (metrics.ymin as i64 + metrics.height as i64);
            trace!(
                "FontdueProvider: {:?} -> {}x{} bitmap at ({}, {})",
                ch,
                metrics.width,
                metrics.height,
                left,
                top
            );

            for (row, line) in bitmap.chunks(metrics.width.max(1)).enumerate() {
                for (col, &alpha) in line.iter().enumerate() {
                    if alpha > 0 {
                        blend_pixel(
                            canvas,
                            left + col as i64,
                            top + row as i64,
                            fg,
                            alpha as f32 / 255.0,
                        );
                    }
                }
            }
            pen_x += metrics.advance_width;
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
