// src/lib.rs

//! Renders each character of a text line as a 64x64 glyph image, producing a
//! labeled dataset for character recognition.
//!
//! ```no_run
//! use glyph_dataset::imaging::OutlineProvider;
//! use glyph_dataset::naming::NamingScheme;
//! use glyph_dataset::renderer::{render_dataset, RenderSettings};
//! use std::path::Path;
//!
//! let chars: Vec<char> = "日本語".chars().collect();
//! let written = render_dataset(
//!     OutlineProvider::new(),
//!     &chars,
//!     Path::new("misc/ARIALUNI.TTF"),
//!     Path::new("img/training"),
//!     NamingScheme::Sequential,
//!     RenderSettings::default(),
//! )?;
//! assert_eq!(written, 3);
//! # Ok::<(), glyph_dataset::error::GlyphError>(())
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod imaging;
pub mod input;
pub mod manifest;
pub mod naming;
pub mod renderer;

pub use error::GlyphError;
