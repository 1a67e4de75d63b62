//! Fixed window text
//!
//! The window text is Spanish and not translated.

pub const WINDOW_TITLE: &str = "Small Caps Discord";
pub const INPUT_LABEL: &str = "Texto normal:";
pub const CONVERT_BUTTON: &str = "Convertir";
pub const OUTPUT_LABEL: &str = "Resultado:";
pub const COPY_BUTTON: &str = "Copiar";
