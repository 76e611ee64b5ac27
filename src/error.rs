use std::path::PathBuf;
use thiserror::Error;

use crate::sanitize::ScrubReport;

/// The main error type for jscrub operations.
#[derive(Debug, Error)]
pub enum ScrubError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input is not valid UTF-8: {0}")]
    Decode(#[source] std::str::Utf8Error),

    #[error("malformed JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("document nesting exceeds {limit} level(s)")]
    TooDeep { limit: usize },

    #[error("document root is null")]
    NullRoot,

    #[error("failed to write sanitized JSON to {path}: {source}")]
    WriteJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("input required {action_count} sanitization action(s)")]
    Dirty {
        action_count: usize,
        report: ScrubReport,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Coarse error taxonomy used by the fuzz harness to separate expected
/// rejections from defects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Raw bytes could not be decoded as text.
    Decode,
    /// The input decoded but is not an acceptable JSON document.
    Malformed,
    /// Filesystem or encoding failure outside the in-memory sanitize path.
    Io,
    /// Policy failure that says nothing about the input bytes themselves.
    Other,
}

impl ScrubError {
    /// Maps each variant onto the harness taxonomy.
    ///
    /// `Syntax`, `TooDeep`, and `NullRoot` are all structural rejections of
    /// the input itself; everything the in-memory sanitize path can return is
    /// therefore `Decode` or `Malformed`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScrubError::Decode(_) => ErrorKind::Decode,
            ScrubError::Syntax(_) | ScrubError::TooDeep { .. } | ScrubError::NullRoot => {
                ErrorKind::Malformed
            }
            ScrubError::Io(_) | ScrubError::WriteJson { .. } => ErrorKind::Io,
            ScrubError::Dirty { .. } | ScrubError::UnsupportedFormat(_) => ErrorKind::Other,
        }
    }
}
