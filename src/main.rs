// src/main.rs

use glyph_dataset::{
    config::Config,
    imaging::{Backend, FontdueProvider, HeadlessProvider, ImagingProvider, OutlineProvider},
    input,
    manifest::emit_manifest,
    renderer::{GlyphRenderer, RenderSettings},
};

// Logging
use anyhow::Context; // For context on Results
use log::info;

/// Main entry point for `glyph-dataset`.
///
/// Reads one line of UTF-8 text from stdin and writes one glyph image per
/// character. With `output.manifest` set, the count and the characters are
/// echoed to stdout afterwards; logs go to stderr.
fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting glyph-dataset...");

    let config = Config::load().context("Failed to load configuration")?;
    info!(
        "Font {:?} at {}px via {:?} backend, output {:?} ({:?} naming)",
        config.font.path,
        config.font.size_px,
        config.font.backend,
        config.output.directory,
        config.output.naming
    );

    let characters = input::read_characters(std::io::stdin().lock(), config.input.limit)
        .context("Failed to read input line from stdin")?;

    let written = match config.font.backend {
        Backend::Outline => run(OutlineProvider::new(), &config, &characters)?,
        Backend::Fontdue => run(FontdueProvider::new(), &config, &characters)?,
        Backend::Headless => run(HeadlessProvider::new(), &config, &characters)?,
    };

    if config.output.manifest {
        emit_manifest(&characters)
            .write_to(std::io::stdout().lock())
            .context("Failed to write manifest to stdout")?;
    }

    info!("glyph-dataset wrote {} images.", written);
    Ok(())
}

fn run<P: ImagingProvider>(
    provider: P,
    config: &Config,
    characters: &[char],
) -> anyhow::Result<usize> {
    let renderer = GlyphRenderer::new(provider, &config.font.path, RenderSettings::from(config))
        .with_context(|| format!("Failed to initialize renderer with {:?}", config.font.path))?;

    renderer
        .render_dataset(characters, &config.output.directory, config.output.naming)
        .with_context(|| format!("Failed to render glyphs into {:?}", config.output.directory))
}
