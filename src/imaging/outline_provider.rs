// src/imaging/outline_provider.rs

//! Outline backend: parses the font with `ttf-parser` and rasterizes glyph
//! outlines with the coverage rasterizer in [`super::coverage`].

use super::coverage::{fill_edges, EdgeBuilder};
use super::provider::{ImagingProvider, TextOrigin};
use super::{new_rgb_canvas, save_png, RgbCanvas};
use crate::color::Color;
use crate::error::GlyphError;
use log::{debug, trace, warn};
use std::fs;
use std::path::{Path, PathBuf};
use ttf_parser::{Face, GlyphId};

/// Font file bytes plus the metrics needed to place glyphs.
///
/// `Face` borrows its data, so the face is re-parsed for each draw; parsing
/// only reads table headers.
#[derive(Debug, Clone)]
pub struct OutlineFont {
    path: PathBuf,
    data: Vec<u8>,
    size_px: f32,
    units_per_em: u16,
    ascender: i16,
}

impl OutlineFont {
    fn face(&self) -> Result<Face<'_>, GlyphError> {
        Face::parse(&self.data, 0).map_err(|e| GlyphError::font_load(&self.path, e))
    }

    /// Font units to pixels.
    pub fn scale(&self) -> f32 {
        self.size_px / self.units_per_em as f32
    }

    /// Distance from the top of the line box to the baseline, in pixels.
    pub fn ascent_px(&self) -> f32 {
        self.ascender as f32 * self.scale()
    }

    pub fn size_px(&self) -> f32 {
        self.size_px
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineProvider;

impl OutlineProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ImagingProvider for OutlineProvider {
    type Font = OutlineFont;
    type Canvas = RgbCanvas;

    fn load_font(&self, path: &Path, size_px: f32) -> Result<OutlineFont, GlyphError> {
        let data = fs::read(path).map_err(|e| GlyphError::font_load(path, e))?;
        let face = Face::parse(&data, 0).map_err(|e| GlyphError::font_load(path, e))?;
        let units_per_em = face.units_per_em();
        let ascender = face.ascender();
        debug!(
            "OutlineProvider: loaded {:?} ({} glyphs, {} units/em, ascender {})",
            path,
            face.number_of_glyphs(),
            units_per_em,
            ascender
        );

        Ok(OutlineFont {
            path: path.to_path_buf(),
            data,
            size_px,
            units_per_em,
            ascender,
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
        font: &OutlineFont,
    ) -> Result<(), GlyphError> {
        let face = font.face()?;
        let scale = font.scale();
        let baseline = origin.y as f32 + font.ascent_px();
        let mut pen_x = origin.x as f32;
        let fg = color.to_rgb();

        for ch in text.chars() {
            let glyph_id = face.glyph_index(ch).unwrap_or_else(|| {
                warn!("OutlineProvider: no glyph for {:?}, drawing .notdef", ch);
                GlyphId(0)
            });

            let mut builder = EdgeBuilder::new(scale, [pen_x, baseline]);
            if face.outline_glyph(glyph_id, &mut builder).is_none() {
                trace!("OutlineProvider: {:?} has no outline", ch);
            }
            let edges = builder.finish();
            trace!(
                "OutlineProvider: {:?} -> glyph {} with {} edges at pen x {:.2}",
                ch,
                glyph_id.0,
                edges.len(),
                pen_x
            );
            fill_edges(&edges, canvas, fg);

            pen_x += face.glyph_hor_advance(glyph_id).unwrap_or(0) as f32 * scale;
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
