// src/naming.rs

//! Output filename rules for rendered glyphs.

use crate::error::GlyphError;
use serde::{Deserialize, Serialize};

/// Extension appended to every glyph file.
pub const GLYPH_EXTENSION: &str = "png";

/// Maps a character's position or value to an output filename.
///
/// The two schemes are never combined within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingScheme {
    /// `"{index}.png"`, zero-based position in the input.
    #[default]
    Sequential,
    /// The character's UTF-8 bytes followed by `.png`. Duplicate characters
    /// map to the same file, so the last occurrence wins.
    ByCharacter,
}

impl NamingScheme {
    /// Returns the filename (not the full path) for the character at `index`.
    pub fn file_name(self, index: usize, ch: char) -> Result<String, GlyphError> {
        match self {
            NamingScheme::Sequential => Ok(format!("{}.{}", index, GLYPH_EXTENSION)),
            NamingScheme::ByCharacter => {
                check_filename_char(ch)?;
                Ok(format!("{}.{}", ch, GLYPH_EXTENSION))
            }
        }
    }
}

/// Characters Windows refuses in filenames, beyond `/` and NUL.
const WINDOWS_RESERVED: [char; 8] = ['\\', ':', '*', '?', '"', '<', '>', '|'];

fn check_filename_char(ch: char) -> Result<(), GlyphError> {
    let forbidden = ch == '/' || ch == '\0' || (cfg!(windows) && WINDOWS_RESERVED.contains(&ch));
    if forbidden {
        return Err(GlyphError::Encoding(format!(
            "character {:?} (U+{:04X}) cannot be used as a filename",
            ch, ch as u32
        )));
    }
    Ok(())
}

/// Recovers the character from a by-character filename such as `"字.png"`.
///
/// Returns `None` if the stem is not exactly one character or the extension differs.
pub fn character_from_file_name(name: &str) -> Option<char> {
    let stem = name.strip_suffix(GLYPH_EXTENSION)?.strip_suffix('.')?;
    let mut chars = stem.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_names_use_index() {
        let scheme = NamingScheme::Sequential;
        assert_eq!(scheme.file_name(0, 'a').unwrap(), "0.png");
        assert_eq!(scheme.file_name(41, '字').unwrap(), "41.png");
    }

    #[test]
    fn sequential_accepts_any_character() {
        assert_eq!(NamingScheme::Sequential.file_name(3, '/').unwrap(), "3.png");
    }

    #[test]
    fn by_character_uses_utf8_bytes() {
        let name = NamingScheme::ByCharacter.file_name(7, '漢').unwrap();
        assert_eq!(name.as_bytes(), "漢.png".as_bytes());
        assert_eq!(&name.as_bytes()[..3], &[0xE6, 0xBC, 0xA2]);
    }

    #[test]
    fn by_character_rejects_path_separator_and_nul() {
        for ch in ['/', '\0'] {
            let err = NamingScheme::ByCharacter.file_name(0, ch).unwrap_err();
            assert!(matches!(err, GlyphError::Encoding(_)), "{:?}", err);
        }
    }

    #[test]
    #[cfg(windows)]
    fn by_character_rejects_windows_reserved_characters() {
        for ch in WINDOWS_RESERVED {
            let err = NamingScheme::ByCharacter.file_name(0, ch).unwrap_err();
            assert!(matches!(err, GlyphError::Encoding(_)), "{:?}", err);
        }
    }

    #[test]
    #[cfg(not(windows))]
    fn windows_reserved_characters_are_valid_names_elsewhere() {
        for ch in [':', '*', '?', '"', '<', '>', '|', '\\'] {
            let name = NamingScheme::ByCharacter.file_name(0, ch).unwrap();
            assert_eq!(character_from_file_name(&name), Some(ch));
        }
    }

    #[test]
    fn by_character_name_round_trips() {
        for ch in ['a', '.', 'Ω', '日', '🦀'] {
            let name = NamingScheme::ByCharacter.file_name(0, ch).unwrap();
            assert_eq!(character_from_file_name(&name), Some(ch));
        }
    }

    #[test]
    fn inverse_rejects_other_names() {
        assert_eq!(character_from_file_name("12.png"), None);
        assert_eq!(character_from_file_name("a.jpg"), None);
        assert_eq!(character_from_file_name(".png"), None);
        assert_eq!(character_from_file_name("apng"), None);
    }

    #[test]
    fn scheme_deserializes_kebab_case() {
        let scheme: NamingScheme = serde_json::from_str("\"by-character\"").unwrap();
        assert_eq!(scheme, NamingScheme::ByCharacter);
    }
}
