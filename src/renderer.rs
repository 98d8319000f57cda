// src/renderer.rs

//! The glyph renderer: one image per input character.
//!
//! The renderer owns an [`ImagingProvider`] and the font it loaded. The font
//! is loaded once in [`GlyphRenderer::new`] and reused read-only for every
//! glyph, so a missing font fails the run before any file is touched.

use crate::color::Color;
use crate::config::Config;
use crate::error::GlyphError;
use crate::imaging::{ImagingProvider, TextOrigin};
use crate::naming::NamingScheme;
use log::{debug, info};
use std::collections::HashSet;
use std::path::Path;

#[cfg(test)]
mod tests;

/// Drawing parameters shared by every glyph of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub font_size_px: f32,
    pub origin: TextOrigin,
    pub background: Color,
    pub foreground: Color,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            canvas_width: 64,
            canvas_height: 64,
            font_size_px: 64.0,
            origin: TextOrigin::default(),
            background: Color::White,
            foreground: Color::Black,
        }
    }
}

impl RenderSettings {
    /// Rejects an empty canvas and non-positive or non-finite font sizes.
    pub fn validate(&self) -> Result<(), GlyphError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(GlyphError::InvalidSettings(format!(
                "canvas must be non-empty, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if !(self.font_size_px.is_finite() && self.font_size_px > 0.0) {
            return Err(GlyphError::InvalidSettings(format!(
                "font size must be positive, got {}",
                self.font_size_px
            )));
        }
        Ok(())
    }
}

impl From<&Config> for RenderSettings {
    fn from(config: &Config) -> Self {
        RenderSettings {
            canvas_width: config.canvas.width,
            canvas_height: config.canvas.height,
            font_size_px: config.font.size_px,
            origin: config.canvas.origin,
            background: config.canvas.background,
            foreground: config.canvas.foreground,
        }
    }
}

pub struct GlyphRenderer<P: ImagingProvider> {
    provider: P,
    font: P::Font,
    settings: RenderSettings,
}

impl<P: ImagingProvider> GlyphRenderer<P> {
    /// Loads the font at `font_path` through `provider`.
    ///
    /// # Errors
    /// [`GlyphError::InvalidSettings`] for an empty canvas or bad font size,
    /// [`GlyphError::FontLoad`] if the font cannot be opened or parsed.
    pub fn new(provider: P, font_path: &Path, settings: RenderSettings) -> Result<Self, GlyphError> {
        settings.validate()?;
        let font = provider.load_font(font_path, settings.font_size_px)?;
        info!(
            "GlyphRenderer: font {:?} loaded at {}px",
            font_path, settings.font_size_px
        );
        Ok(Self {
            provider,
            font,
            settings,
        })
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Renders `ch` onto a fresh canvas filled with the background color.
    ///
    /// A backend handing back a canvas of the wrong size is an
    /// [`GlyphError::InvalidSettings`].
    pub fn render_glyph(&self, ch: char) -> Result<P::Canvas, GlyphError> {
        let s = &self.settings;
        let mut canvas = self
            .provider
            .new_canvas(s.canvas_width, s.canvas_height, s.background);
        let (width, height) = self.provider.dimensions(&canvas);
        if (width, height) != (s.canvas_width, s.canvas_height) {
            return Err(GlyphError::InvalidSettings(format!(
                "backend allocated a {}x{} canvas, expected {}x{}",
                width, height, s.canvas_width, s.canvas_height
            )));
        }
        let mut buf = [0u8; 4];
        self.provider.draw_text(
            &mut canvas,
            s.origin,
            ch.encode_utf8(&mut buf),
            s.foreground,
            &self.font,
        )?;
        Ok(canvas)
    }

    /// Renders every character of `characters` into `output_dir`.
    ///
    /// Returns the number of images written, which equals `characters.len()`.
    /// Under [`NamingScheme::ByCharacter`] a repeated character rewrites the
    /// same file, so the directory ends up holding one file per distinct
    /// character with the last occurrence's image.
    ///
    /// Stops at the first error; files already written are left in place.
    /// `output_dir` must already exist.
    pub fn render_dataset(
        &self,
        characters: &[char],
        output_dir: &Path,
        naming: NamingScheme,
    ) -> Result<usize, GlyphError> {
        info!(
            "Rendering {} glyphs into {:?} ({:?} naming)",
            characters.len(),
            output_dir,
            naming
        );

        let mut names: HashSet<String> = HashSet::with_capacity(characters.len());
        let mut written = 0;
        for (index, &ch) in characters.iter().enumerate() {
            let file_name = naming.file_name(index, ch)?;
            let canvas = self.render_glyph(ch)?;
            let path = output_dir.join(&file_name);
            self.provider.save(&canvas, &path)?;

            let (width, height) = self.provider.dimensions(&canvas);
            if !names.insert(file_name) {
                debug!(
                    "Glyph {} ({:?}) {}x{} overwrote {:?}",
                    index, ch, width, height, path
                );
            } else {
                debug!("Glyph {} ({:?}) {}x{} -> {:?}", index, ch, width, height, path);
            }
            written += 1;
        }

        info!(
            "Wrote {} glyph images ({} distinct files)",
            written,
            names.len()
        );
        Ok(written)
    }
}

/// Loads the font, then renders `characters` into `output_dir`.
///
/// Convenience wrapper over [`GlyphRenderer::new`] and
/// [`GlyphRenderer::render_dataset`].
pub fn render_dataset<P: ImagingProvider>(
    provider: P,
    characters: &[char],
    font_path: &Path,
    output_dir: &Path,
    naming: NamingScheme,
    settings: RenderSettings,
) -> Result<usize, GlyphError> {
    GlyphRenderer::new(provider, font_path, settings)?.render_dataset(characters, output_dir, naming)
}
