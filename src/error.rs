//! Small Caps Error Types
//!
//! Centralized error handling for the library and both binaries.

use thiserror::Error;

/// Central error type for Small Caps
#[derive(Error, Debug)]
pub enum SmallCapsError {
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Small Caps operations
pub type SmallCapsResult<T> = Result<T, SmallCapsError>;

impl From<arboard::Error> for SmallCapsError {
    fn from(err: arboard::Error) -> Self {
        SmallCapsError::Clipboard(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_error_display() {
        let err = SmallCapsError::Clipboard("no display".to_string());
        assert_eq!(err.to_string(), "Clipboard error: no display");
    }

    #[test]
    fn test_json_error_is_transparent() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = json_err.to_string();
        let err: SmallCapsError = json_err.into();
        assert_eq!(err.to_string(), expected);
    }
}
