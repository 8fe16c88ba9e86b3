//! Crate-level error types.

use std::fmt;

/// Errors produced by the trackball crate.
///
/// Controller math is infallible; only option persistence can fail.
#[derive(Debug)]
pub enum TrackballError {
    /// Generic I/O failure while reading or writing a preset.
    Io(std::io::Error),
    /// TOML or JSON options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for TrackballError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for TrackballError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for TrackballError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
