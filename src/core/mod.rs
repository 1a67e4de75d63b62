//! Core transformation modules
//!
//! Contains the glyph tables and the text transformer built on them.

pub mod char_map;
pub mod transformer;

pub use char_map::{CharacterMap, GlyphTable};
pub use transformer::{small_caps, TextTransformer};
