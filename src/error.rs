//! Structured error type for termdialog.
//!
//! Library functions return [`DialogError`]; the binary turns it into a
//! diagnostic and a non-zero exit status.

use std::fmt::Display;
use std::io;

use thiserror::Error;

/// Boxed error a caller-supplied collaborator may fail with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T, E = DialogError> = std::result::Result<T, E>;

/// Everything that can abort a widget.
#[derive(Error, Debug)]
pub enum DialogError {
    /// The requested window does not fit on the screen. Fatal, never retried.
    #[error(
        "terminal too small: need {needed_width}x{needed_height}, have {width}x{height}"
    )]
    TerminalTooSmall {
        needed_width: u16,
        needed_height: u16,
        width: u16,
        height: u16,
    },

    /// A menu needs at least one entry.
    #[error("menu has no entries")]
    EmptyMenu,

    /// The autocomplete collaborator failed. Propagated as-is.
    #[error("autocomplete failed for query {query:?}: {source}")]
    Autocomplete {
        query: String,
        #[source]
        source: BoxError,
    },

    /// The user pressed Ctrl+C.
    #[error("interrupted")]
    Interrupted,

    /// A scripted key source ran out of keys.
    #[error("key input exhausted")]
    InputExhausted,

    /// I/O on the terminal or a log file failed.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// The ratatui backend reported an error.
    #[error("terminal backend error: {0}")]
    Backend(String),

    /// Serializing a result for output failed.
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl DialogError {
    /// Wrap a backend error of any type.
    pub fn backend(err: impl Display) -> Self {
        DialogError::Backend(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_small_message_names_both_sizes() {
        let err = DialogError::TerminalTooSmall {
            needed_width: 40,
            needed_height: 12,
            width: 20,
            height: 10,
        };
        assert_eq!(err.to_string(), "terminal too small: need 40x12, have 20x10");
    }

    #[test]
    fn autocomplete_error_keeps_its_source() {
        let err = DialogError::Autocomplete {
            query: "al".into(),
            source: "index offline".into(),
        };
        assert!(err.to_string().contains("\"al\""));
        assert_eq!(
            std::error::Error::source(&err).map(|s| s.to_string()),
            Some("index offline".to_string())
        );
    }

    #[test]
    fn io_errors_convert() {
        let err: DialogError = io::Error::other("boom").into();
        assert!(matches!(err, DialogError::Io { .. }));
    }
}
