//! Main application state for the Small Caps GUI
//!
//! Contains the SmallCapsApp struct and initialization logic.

use iced::Task;
use tracing::{info, warn};

use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::config::Config;
use crate::core::TextTransformer;

use super::labels;
use super::messages::Message;

/// Main application state
pub struct SmallCapsApp {
    /// Contents of the input field
    pub(crate) input: String,
    /// Contents of the read-only result field
    pub(crate) output: String,
    pub(crate) transformer: TextTransformer,
    /// None when the host clipboard could not be opened
    pub(crate) clipboard: Option<Box<dyn ClipboardSink>>,
    pub(crate) config: Config,
}

impl SmallCapsApp {
    /// Create a new SmallCapsApp wired to the system clipboard
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let clipboard: Option<Box<dyn ClipboardSink>> = match SystemClipboard::new() {
            Ok(clipboard) => Some(Box::new(clipboard)),
            Err(e) => {
                warn!("⚠️ System clipboard unavailable, copying disabled: {}", e);
                None
            }
        };

        info!("🚀 Small Caps app initialized ({:?} table)", config.glyph_table);

        (Self::with_clipboard(config, clipboard), Task::none())
    }

    /// Create an app with an explicit clipboard
    pub fn with_clipboard(config: Config, clipboard: Option<Box<dyn ClipboardSink>>) -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            transformer: TextTransformer::with_table(config.glyph_table),
            clipboard,
            config,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Application title
    pub fn title(&self) -> String {
        labels::WINDOW_TITLE.to_string()
    }

    /// Application theme
    pub fn theme(&self) -> iced::Theme {
        if self.config.dark_theme {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}
