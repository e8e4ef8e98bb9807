//! Console helper errors.

use std::io;

/// Errors returned by the prompted read operations.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("'{input}' is not a valid {type_name}: {reason}")]
    InvalidFormat {
        input: String,
        type_name: &'static str,
        reason: String,
    },

    #[error("No converter registered for {type_name}")]
    NoConverter { type_name: &'static str },

    #[error("Input stream ended before a value was read")]
    EndOfInput,

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl ConsoleError {
    /// True for the errors raised when text cannot become the requested type.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            ConsoleError::InvalidFormat { .. } | ConsoleError::NoConverter { .. }
        )
    }
}
