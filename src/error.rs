//! Application error types.
//!
//! The parse-and-format core never fails; these errors belong to the layers
//! around it (settings persistence, clipboard access, the command line).

use std::path::PathBuf;
use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<PathBuf>,
    },

    /// Settings file could not be read or written as JSON
    #[error("Invalid settings file {path:?}: {source}")]
    Settings {
        /// Settings file involved, if known.
        path: Option<PathBuf>,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// System clipboard unavailable or unreadable
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a settings error with file context
    pub fn settings(source: serde_json::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Settings { path: path.into(), source }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<arboard::Error> for Error {
    fn from(e: arboard::Error) -> Self {
        Self::Clipboard(e.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}
