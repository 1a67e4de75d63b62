//! Text Transformation
//!
//! Converts text to small capitals one character at a time.

use super::char_map::{CharacterMap, GlyphTable};

/// Applies a [`CharacterMap`] to text
#[derive(Debug, Clone, Default)]
pub struct TextTransformer {
    map: CharacterMap,
}

impl TextTransformer {
    /// Create a transformer over the given map
    pub fn new(map: CharacterMap) -> Self {
        Self { map }
    }

    /// Create a transformer over a named glyph table
    pub fn with_table(table: GlyphTable) -> Self {
        Self::new(CharacterMap::for_table(table))
    }

    pub fn map(&self) -> &CharacterMap {
        &self.map
    }

    /// Transform text, leaving unmapped characters untouched
    pub fn transform(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        self.transform_into(text, &mut out);
        out
    }

    /// Append the transformed text to `out`
    pub fn transform_into(&self, text: &str, out: &mut String) {
        out.extend(text.chars().map(|c| self.map.lookup(c).unwrap_or(c)));
    }
}

/// Transform with the classic table
pub fn small_caps(text: &str) -> String {
    TextTransformer::default().transform(text)
}
