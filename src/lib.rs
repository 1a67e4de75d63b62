//! Small Caps Library
//!
//! Converts Latin letters to Unicode small capitals, with the iced window
//! and clipboard plumbing used by the launcher.

pub mod clipboard;
pub mod config;
pub mod core;
pub mod error;
pub mod gui;

pub use crate::core::{small_caps, CharacterMap, GlyphTable, TextTransformer};
