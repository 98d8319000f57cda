// src/imaging/mod.rs

//! Imaging backends.
//!
//! The renderer only sees the [`ImagingProvider`] trait. Each backend decides
//! how fonts are parsed and how text is rasterized, but all of them draw onto
//! the same RGB canvas type and encode it as PNG:
//!
//! ```text
//! GlyphRenderer  →  ImagingProvider  →  RgbCanvas  →  PNG on disk
//!                     ├─ OutlineProvider  (ttf-parser outlines, own coverage raster)
//!                     ├─ FontdueProvider  (fontdue bitmaps)
//!                     └─ HeadlessProvider (deterministic blocks, no font parsing)
//! ```

pub mod coverage;
pub mod fontdue_provider;
pub mod headless_provider;
pub mod outline_provider;
pub mod provider;

pub use fontdue_provider::FontdueProvider;
pub use headless_provider::HeadlessProvider;
pub use outline_provider::OutlineProvider;
pub use provider::{ImagingProvider, TextOrigin};

use crate::color::{self, Color};
use crate::error::{self, GlyphError};
use image::{ImageFormat, RgbImage};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// In-memory raster surface all backends draw onto.
pub type RgbCanvas = RgbImage;

/// Selects which [`ImagingProvider`] the binary constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Outline,
    Fontdue,
    Headless,
}

pub(crate) fn new_rgb_canvas(width: u32, height: u32, background: Color) -> RgbCanvas {
    RgbImage::from_pixel(width, height, background.into())
}

pub(crate) fn save_png(canvas: &RgbCanvas, path: &Path) -> Result<(), GlyphError> {
    canvas
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| error::from_image_error(path, e))
}

/// Blends `fg` into the pixel at (`x`, `y`); coordinates off the canvas are ignored.
pub(crate) fn blend_pixel(canvas: &mut RgbCanvas, x: i64, y: i64, fg: [u8; 3], coverage: f32) {
    if x < 0 || y < 0 || x >= canvas.width() as i64 || y >= canvas.height() as i64 {
        return;
    }
    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
    pixel.0 = color::blend(pixel.0, fg, coverage);
}
