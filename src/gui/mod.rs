//! GUI module using iced
//!
//! The converter window: one input field, one read-only result field and
//! the Convert and Copy buttons.

use iced::widget::{button, column, text, text_input};
use iced::{Alignment, Element, Length, Task};
use tracing::{debug, warn};

// Sub-modules
pub mod app;
pub mod labels;
pub mod messages;

// Re-exports for convenience
pub use app::SmallCapsApp;
pub use messages::Message;

impl SmallCapsApp {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
            }
            Message::ConvertPressed => {
                self.output = self.transformer.transform(&self.input);
                debug!("🔤 Converted {} chars", self.input.chars().count());
            }
            Message::CopyPressed => {
                self.copy_output();
            }
        }

        Task::none()
    }

    /// Put the current result on the clipboard. Failures are logged only.
    fn copy_output(&mut self) {
        let Some(clipboard) = self.clipboard.as_mut() else {
            warn!("⚠️ Copy requested but no clipboard is available");
            return;
        };

        if let Err(e) = clipboard.replace(&self.output) {
            warn!("⚠️ Clipboard write failed: {}", e);
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let size = self.config.font_size;

        let input = text_input("", &self.input)
            .on_input(Message::InputChanged)
            .on_submit(Message::ConvertPressed)
            .size(size)
            .padding(5);

        // No on_input: iced renders this as a read-only field
        let output = text_input("", &self.output).size(size).padding(5);

        column![
            text(labels::INPUT_LABEL),
            input,
            button(text(labels::CONVERT_BUTTON)).on_press(Message::ConvertPressed),
            text(labels::OUTPUT_LABEL),
            output,
            button(text(labels::COPY_BUTTON)).on_press(Message::CopyPressed),
        ]
        .spacing(8)
        .padding([5, 20])
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .into()
    }
}
