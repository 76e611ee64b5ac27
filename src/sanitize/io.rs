//! File-level sanitization entry points.
//!
//! These wrap the in-memory sanitizer for CLI and batch use: read a file's
//! raw bytes, sanitize, and optionally write the cleaned document back out.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use serde_json::Value;

use super::{sanitize_slice, Sanitized, ScrubOptions};
use crate::error::ScrubError;

/// Reads and sanitizes a JSON file.
///
/// The file is read as raw bytes so that invalid UTF-8 surfaces as a decode
/// error rather than an IO error.
///
/// # Errors
/// Returns an error if the file cannot be read or the content is rejected.
pub fn sanitize_json_file(path: &Path, opts: &ScrubOptions) -> Result<Sanitized, ScrubError> {
    let bytes = fs::read(path).map_err(ScrubError::Io)?;
    sanitize_slice(&bytes, opts)
}

/// Writes a sanitized document to a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_json(path: &Path, value: &Value) -> Result<(), ScrubError> {
    let file = File::create(path).map_err(ScrubError::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, value).map_err(|source| ScrubError::WriteJson {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("dirty.json");
        let output = dir.path().join("clean.json");

        std::fs::write(&input, "{\"line\": \"a\\u0000b\"}").expect("write input");

        let sanitized =
            sanitize_json_file(&input, &ScrubOptions::default()).expect("sanitize file");
        assert_eq!(sanitized.value, json!({"line": "ab"}));

        write_json(&output, &sanitized.value).expect("write output");

        let reread =
            sanitize_json_file(&output, &ScrubOptions::default()).expect("re-read output");
        assert!(reread.report.is_clean());
        assert_eq!(reread.value, sanitized.value);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = sanitize_json_file(Path::new("no/such/file.json"), &ScrubOptions::default())
            .unwrap_err();
        assert!(matches!(err, ScrubError::Io(_)));
    }

    #[test]
    fn invalid_utf8_file_is_decode_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("binary.json");
        std::fs::write(&input, b"\x80\x81").expect("write input");

        let err = sanitize_json_file(&input, &ScrubOptions::default()).unwrap_err();
        assert!(matches!(err, ScrubError::Decode(_)));
    }
}
