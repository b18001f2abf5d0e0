//! Error types for svg2symbol.
//!
//! Malformed path data is never an error: the transformer skips what it
//! cannot read. What remains is a source with nothing to convert, file
//! access, and bad options.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The unified error type returned by the public conversion API.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source document has no `<path>` element with a `d` attribute.
    #[error("no <path> elements found")]
    NoPathFound,

    /// Reading the source or writing the result failed.
    #[error("could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An options document failed to parse.
    #[error("failed to parse options: {source}\n  Hint: {hint}")]
    Options {
        #[source]
        source: serde_json::Error,
        hint: &'static str,
    },

    /// Options parsed but describe an unusable grid.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters."
            }
            serde_json::error::Category::Data => {
                "Known fields are gridSize, yOffset, defaultSourceWidth, size and fill."
            }
            serde_json::error::Category::Eof => "Unexpected end of input. Is the file truncated?",
            serde_json::error::Category::Io => "The options could not be read.",
        };
        ConvertError::Options { source: e, hint }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_message() {
        assert_eq!(ConvertError::NoPathFound.to_string(), "no <path> elements found");
    }

    #[test]
    fn test_io_names_path() {
        let err = ConvertError::io(
            "missing.svg",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().starts_with("could not access missing.svg"));
    }

    #[test]
    fn test_json_hint() {
        let json_err = serde_json::from_str::<serde_json::Value>("{,}").unwrap_err();
        let err = ConvertError::from(json_err);
        assert!(err.to_string().contains("Hint: Check for trailing commas"));
    }
}
