// src/config.rs

//! Configuration for a dataset run.
//!
//! Every section derives `Deserialize` with `#[serde(default)]`, so a config
//! file only needs to name the settings it changes. Defaults reproduce the
//! classic layout: a 64px font drawn at (0, -12) on a 64x64 white canvas,
//! written as `0.png`, `1.png`, ... into `img/training`.

use crate::color::Color;
use crate::imaging::{Backend, TextOrigin};
use crate::naming::NamingScheme;
use crate::renderer::RenderSettings;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "GLYPH_DATASET_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "glyph-dataset.json";

/// Root of the configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub font: FontConfig,
    pub canvas: CanvasConfig,
    pub output: OutputConfig,
    pub input: InputConfig,
}

/// Which font to load and how to rasterize it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FontConfig {
    /// Path of the TrueType/OpenType file, relative to the working directory.
    pub path: PathBuf,
    /// Em size in pixels.
    pub size_px: f32,
    /// Imaging backend used to draw glyphs.
    pub backend: Backend,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            path: PathBuf::from("misc/ARIALUNI.TTF"),
            size_px: 64.0,
            backend: Backend::Outline,
        }
    }
}

/// Glyph canvas geometry and colors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub foreground: Color,
    /// Top-left of the text line. The vertical default is tuned for a 64px
    /// font and is not derived from font metrics.
    pub origin: TextOrigin,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        CanvasConfig {
            width: 64,
            height: 64,
            background: Color::White,
            foreground: Color::Black,
            origin: TextOrigin::default(),
        }
    }
}

/// Where and how glyph images are written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Existing directory receiving the images. It is never created.
    pub directory: PathBuf,
    pub naming: NamingScheme,
    /// Print the manifest (count, then one character per line) to stdout.
    pub manifest: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            directory: PathBuf::from("img/training"),
            naming: NamingScheme::Sequential,
            manifest: false,
        }
    }
}

/// Input handling.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Render at most this many characters.
    pub limit: Option<usize>,
}

impl Config {
    /// Loads the config named by `GLYPH_DATASET_CONFIG`, else
    /// `glyph-dataset.json` in the working directory, else the defaults.
    pub fn load() -> Result<Config> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Config::from_file(Path::new(&path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Config::from_file(local);
        }
        info!("No config file found, using defaults");
        let config = Config::default();
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config = Config::from_json(&text)
            .with_context(|| format!("Invalid config file {:?}", path))?;
        info!("Configuration loaded from {:?}", path);
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Config> {
        let config: Config = serde_json::from_str(text).context("Failed to parse JSON")?;
        config.validate()?;
        debug!("Parsed config: {:?}", config);
        Ok(config)
    }

    /// Applies the same geometry checks the renderer does.
    pub fn validate(&self) -> Result<()> {
        RenderSettings::from(self).validate()?;
        Ok(())
    }
}
