//! Fuzz entry points for the sanitizer.
//!
//! The classification logic lives here in the library rather than in the
//! fuzz targets themselves so it can be unit-tested: the targets under
//! `fuzz/fuzz_targets/` are thin wrappers around these functions.
//!
//! Classification per invocation:
//! - a rejection whose kind is on the entry point's allow-list is an
//!   expected, correctly handled edge case and produces no report;
//! - an accepted value must not be a null document and must re-encode to
//!   JSON text;
//! - anything else aborts through [`fail_with_input`], which prints a bounded
//!   preview of the offending input and panics so the fuzz engine records,
//!   minimizes, and persists the crashing case.

use crate::error::ErrorKind;
use crate::sanitize::{sanitize_slice, sanitize_str, Sanitized, ScrubOptions};

/// At most this many bytes of a crashing input are echoed to stderr.
const INPUT_PREVIEW_BYTES: usize = 100;

/// Fuzz entry point for the byte-input sanitizer path.
///
/// Decode and malformed-value rejections are expected; any other failure is
/// a defect.
pub fn fuzz_sanitize_bytes(data: &[u8]) {
    match sanitize_slice(data, &ScrubOptions::default()) {
        Ok(sanitized) => check_accepted(data, &sanitized),
        Err(err) => match err.kind() {
            ErrorKind::Decode | ErrorKind::Malformed => {}
            _ => fail_with_input(data, &err.to_string()),
        },
    }
}

/// Fuzz entry point for the text-input sanitizer path.
///
/// The raw bytes are decoded with [`decode_dropping`] first, so the
/// sanitizer always receives well-formed text and only malformed-value
/// rejections are expected; a decode error after decoding is a defect.
pub fn fuzz_sanitize_str(data: &[u8]) {
    let text = decode_dropping(data);
    match sanitize_str(&text, &ScrubOptions::default()) {
        Ok(sanitized) => check_accepted(data, &sanitized),
        Err(err) => match err.kind() {
            ErrorKind::Malformed => {}
            _ => fail_with_input(data, &err.to_string()),
        },
    }
}

/// Decodes bytes as UTF-8, silently dropping invalid sequences.
///
/// Unlike `String::from_utf8_lossy` this removes undecodable bytes instead
/// of replacing them with U+FFFD, so a replacement character in the output
/// was a replacement character in the input.
pub fn decode_dropping(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// An accepted value must uphold the sanitizer's output contract.
fn check_accepted(data: &[u8], sanitized: &Sanitized) {
    assert!(
        !sanitized.value.is_null(),
        "sanitizer accepted input but produced a null document"
    );

    if let Err(err) = serde_json::to_string(&sanitized.value) {
        fail_with_input(data, &format!("sanitized value failed to re-encode: {err}"));
    }
}

/// Prints a bounded preview of the offending input, then panics.
fn fail_with_input(data: &[u8], message: &str) -> ! {
    let preview = input_preview(data);
    eprintln!(
        "unexpected sanitizer failure on input (first {} of {} bytes): {:?}",
        preview.len(),
        data.len(),
        preview
    );
    panic!("{}", message);
}

fn input_preview(data: &[u8]) -> &[u8] {
    &data[..data.len().min(INPUT_PREVIEW_BYTES)]
}
