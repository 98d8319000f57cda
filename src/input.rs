// src/input.rs

//! Reads the character sequence to render.

use crate::error::GlyphError;
use log::{debug, warn};
use std::io::BufRead;

/// Reads one line from `reader` and decodes it as UTF-8.
///
/// The trailing line terminator (`\n` or `\r\n`) is stripped. Invalid UTF-8
/// is an [`GlyphError::Encoding`]; input is never decoded lossily. When
/// `limit` is set, only the first `limit` characters are kept.
pub fn read_characters<R: BufRead>(
    mut reader: R,
    limit: Option<usize>,
) -> Result<Vec<char>, GlyphError> {
    let mut raw = Vec::new();
    reader
        .read_until(b'\n', &mut raw)
        .map_err(|e| GlyphError::io("<stdin>", e))?;

    if raw.last() == Some(&b'\n') {
        raw.pop();
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
    }

    let line = String::from_utf8(raw).map_err(|e| {
        GlyphError::Encoding(format!(
            "input is not valid UTF-8 (first bad byte at offset {})",
            e.utf8_error().valid_up_to()
        ))
    })?;

    let mut chars: Vec<char> = line.chars().collect();
    debug!("Read {} characters from input", chars.len());

    if let Some(limit) = limit {
        if chars.len() > limit {
            warn!(
                "Input has {} characters, keeping the first {}",
                chars.len(),
                limit
            );
            chars.truncate(limit);
        }
    }
    Ok(chars)
}
