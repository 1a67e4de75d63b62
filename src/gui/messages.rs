//! Message types for the Small Caps GUI
//!
//! All messages that can be sent to update the application state.

/// Messages that drive the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The user edited the input field
    InputChanged(String),
    /// "Convertir" pressed, or Enter in the input field
    ConvertPressed,
    /// "Copiar" pressed
    CopyPressed,
}
