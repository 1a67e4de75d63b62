use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::GlyphTable;
use crate::error::{SmallCapsError, SmallCapsResult};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Conversion
    pub glyph_table: GlyphTable,

    // Window
    pub font_size: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub dark_theme: bool,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            glyph_table: GlyphTable::Classic,
            font_size: 16.0,
            window_width: 400.0,
            window_height: 220.0,
            dark_theme: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location
    pub fn load() -> SmallCapsResult<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`.
    ///
    /// A missing file gives defaults without creating one. A corrupt file is
    /// moved aside to `*.json.corrupt` and reported as
    /// [`SmallCapsError::Config`]; callers log it and fall back to defaults
    /// once logging is up.
    pub fn load_from(path: &Path) -> SmallCapsResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            let backup_path = path.with_extension("json.corrupt");
            let _ = std::fs::rename(path, &backup_path);
            SmallCapsError::Config(format!(
                "{} is corrupted or invalid ({}), moved to {}",
                path.display(),
                e,
                backup_path.display()
            ))
        })
    }

    /// Load config from the default location, falling back to defaults.
    ///
    /// The error, if any, is handed back so it can be logged after the
    /// subscriber is installed.
    pub fn load_or_default() -> (Self, Option<SmallCapsError>) {
        match Self::load() {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> SmallCapsResult<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> SmallCapsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("smallcaps")
        .join("config.json")
}
