//! Clipboard access
//!
//! The window writes results through [`ClipboardSink`] so tests can swap in
//! [`MemoryClipboard`].

use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

use crate::error::SmallCapsResult;

/// Something that can take over the clipboard contents
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`
    fn replace(&mut self, text: &str) -> SmallCapsResult<()>;
}

/// Host clipboard backed by arboard.
///
/// Keep the value alive while the window is open: on X11 the selection is
/// only served while this handle exists.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> SmallCapsResult<Self> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl ClipboardSink for SystemClipboard {
    fn replace(&mut self, text: &str) -> SmallCapsResult<()> {
        self.inner.clear()?;
        self.inner.set_text(text.to_string())?;
        debug!("📋 Copied {} chars to system clipboard", text.chars().count());
        Ok(())
    }
}

/// In-process clipboard.
///
/// Clones share one buffer, so a handle kept outside the window still sees
/// what the window copied.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Rc<RefCell<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value written, if any
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn replace(&mut self, text: &str) -> SmallCapsResult<()> {
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_starts_empty() {
        assert_eq!(MemoryClipboard::new().contents(), None);
    }

    #[test]
    fn test_memory_clipboard_replaces_previous() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.replace("first").expect("write");
        clipboard.replace("ᴀʙᴄ").expect("write");
        assert_eq!(clipboard.contents().as_deref(), Some("ᴀʙᴄ"));
    }

    #[test]
    fn test_memory_clipboard_clones_share_contents() {
        let reader = MemoryClipboard::new();
        let mut writer = reader.clone();
        writer.replace("ꜰᴏᴏ").expect("write");
        assert_eq!(reader.contents().as_deref(), Some("ꜰᴏᴏ"));
    }

    #[test]
    fn test_memory_clipboard_accepts_empty() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.replace("old").expect("write");
        clipboard.replace("").expect("write");
        assert_eq!(clipboard.contents().as_deref(), Some(""));
    }
}
