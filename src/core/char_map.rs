//! Character Map
//!
//! The fixed a-z to small capital glyph tables.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Glyphs for `a..=z`, as used by the Discord converter.
///
/// `s` and `x` map to themselves.
const CLASSIC_GLYPHS: [char; 26] = [
    'ᴀ', 'ʙ', 'ᴄ', 'ᴅ', 'ᴇ', 'ꜰ', 'ɢ', 'ʜ', 'ɪ', 'ᴊ', 'ᴋ', 'ʟ', 'ᴍ',
    'ɴ', 'ᴏ', 'ᴘ', 'ǫ', 'ʀ', 's', 'ᴛ', 'ᴜ', 'ᴠ', 'ᴡ', 'x', 'ʏ', 'ᴢ',
];

/// LATIN LETTER SMALL CAPITAL S
const SMALL_CAPITAL_S: char = '\u{A731}';

/// Which glyph table a [`CharacterMap`] is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GlyphTable {
    /// `s` and `x` left as plain letters
    #[default]
    Classic,
    /// Classic plus `s -> ꜱ`. Unicode has no small capital X.
    Extended,
}

/// Immutable mapping from lowercase ASCII letters to display glyphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterMap {
    glyphs: [char; 26],
}

impl CharacterMap {
    /// The default table
    pub fn classic() -> Self {
        Self {
            glyphs: CLASSIC_GLYPHS,
        }
    }

    /// Classic table with a real small capital S
    pub fn extended() -> Self {
        let mut glyphs = CLASSIC_GLYPHS;
        glyphs[(b's' - b'a') as usize] = SMALL_CAPITAL_S;
        Self { glyphs }
    }

    pub fn for_table(table: GlyphTable) -> Self {
        match table {
            GlyphTable::Classic => Self::classic(),
            GlyphTable::Extended => Self::extended(),
        }
    }

    /// Look up a character after lowercasing it.
    ///
    /// Returns `None` unless the lowercase form is exactly one of `a..=z`.
    /// Full Unicode lowercasing applies, so KELVIN SIGN finds `k`.
    pub fn lookup(&self, c: char) -> Option<char> {
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) if l.is_ascii_lowercase() => {
                Some(self.glyphs[(l as u8 - b'a') as usize])
            }
            _ => None,
        }
    }

    /// Iterate `(letter, glyph)` pairs in alphabetical order
    pub fn entries(&self) -> impl Iterator<Item = (char, char)> + '_ {
        (b'a'..=b'z').map(char::from).zip(self.glyphs.iter().copied())
    }
}

impl Default for CharacterMap {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_lookup() {
        let map = CharacterMap::classic();
        assert_eq!(map.lookup('a'), Some('ᴀ'));
        assert_eq!(map.lookup('f'), Some('ꜰ'));
        assert_eq!(map.lookup('q'), Some('ǫ'));
        assert_eq!(map.lookup('z'), Some('ᴢ'));
    }

    #[test]
    fn test_s_and_x_are_identity_in_classic() {
        let map = CharacterMap::classic();
        assert_eq!(map.lookup('s'), Some('s'));
        assert_eq!(map.lookup('x'), Some('x'));
        assert_eq!(map.lookup('S'), Some('s'));
    }

    #[test]
    fn test_extended_only_changes_s() {
        let classic = CharacterMap::classic();
        let extended = CharacterMap::extended();
        for ((letter, a), (_, b)) in classic.entries().zip(extended.entries()) {
            if letter == 's' {
                assert_eq!(b, 'ꜱ');
            } else {
                assert_eq!(a, b, "glyph for '{}' differs", letter);
            }
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let map = CharacterMap::classic();
        for (letter, glyph) in map.entries() {
            assert_eq!(map.lookup(letter.to_ascii_uppercase()), Some(glyph));
        }
    }

    #[test]
    fn test_unmapped_characters() {
        let map = CharacterMap::classic();
        for c in ['1', '!', ' ', 'é', 'É', 'ñ', 'ß', 'ᴀ', '\n'] {
            assert_eq!(map.lookup(c), None, "'{}' should be unmapped", c);
        }
        // Lowercases to "i\u{307}", two chars
        assert_eq!(map.lookup('İ'), None);
    }

    #[test]
    fn test_kelvin_sign_lowercases_to_k() {
        let map = CharacterMap::classic();
        assert_eq!(map.lookup('\u{212A}'), Some('ᴋ'));
    }

    #[test]
    fn test_entries_cover_alphabet() {
        let letters: String = CharacterMap::classic().entries().map(|(l, _)| l).collect();
        assert_eq!(letters, "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn test_glyph_table_serde() {
        assert_eq!(
            serde_json::to_string(&GlyphTable::Extended).expect("serialize"),
            "\"extended\""
        );
        let table: GlyphTable = serde_json::from_str("\"classic\"").expect("deserialize");
        assert_eq!(table, GlyphTable::Classic);
        assert_eq!(CharacterMap::for_table(table), CharacterMap::classic());
    }
}
