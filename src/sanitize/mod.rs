//! Defensive sanitization of untrusted JSON documents.
//!
//! This module turns raw bytes or text into a [`serde_json::Value`] that is
//! guaranteed to re-serialize as valid JSON text and is safe for
//! line-oriented consumers (log pipelines, JSONL stores) that cannot tolerate
//! raw control characters or unbounded nesting.
//!
//! The pipeline has two stages, mirroring parse-then-validate:
//!
//! 1. **Decode + parse**: strict UTF-8 validation (bytes path only), then a
//!    `serde_json` parse. Failures here reject the input outright.
//! 2. **Scrub**: a structural pass over the parsed document that enforces the
//!    nesting cap, rejects a null root, strips disallowed control characters
//!    from strings and object keys, and records every change in a
//!    [`ScrubReport`].
//!
//! Rejection is reserved for problems that cannot be fixed in place; anything
//! fixable is fixed and reported.

mod report;

pub use report::{ActionCode, ScrubAction, ScrubReport};

pub mod io;

use serde_json::{Map, Value};

use crate::error::ScrubError;

/// Default cap on container nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options for sanitization behavior.
#[derive(Clone, Debug)]
pub struct ScrubOptions {
    /// Maximum container nesting depth; the document root sits at depth 0.
    pub max_depth: usize,
}

impl Default for ScrubOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// A sanitized document together with the record of applied changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Sanitized {
    /// The sanitized document. Always re-serializable to JSON text.
    pub value: Value,

    /// What sanitization changed. Empty for already-clean input.
    pub report: ScrubReport,
}

/// Sanitizes a raw byte slice.
///
/// The bytes must be valid UTF-8; invalid sequences reject the input with
/// [`ScrubError::Decode`]. Callers that want lossy decoding must decode
/// before calling [`sanitize_str`].
pub fn sanitize_slice(bytes: &[u8], opts: &ScrubOptions) -> Result<Sanitized, ScrubError> {
    let text = std::str::from_utf8(bytes).map_err(ScrubError::Decode)?;
    sanitize_str(text, opts)
}

/// Sanitizes a JSON text document.
pub fn sanitize_str(input: &str, opts: &ScrubOptions) -> Result<Sanitized, ScrubError> {
    let value: Value = serde_json::from_str(input).map_err(ScrubError::Syntax)?;
    sanitize_value(value, opts)
}

/// Sanitizes an already-parsed JSON value.
///
/// Useful when the document was produced in-process and never existed as
/// text, e.g. assembled from API responses.
pub fn sanitize_value(value: Value, opts: &ScrubOptions) -> Result<Sanitized, ScrubError> {
    if value.is_null() {
        return Err(ScrubError::NullRoot);
    }

    let mut report = ScrubReport::new();
    let mut pointer = String::new();
    let value = scrub(value, 0, opts, &mut pointer, &mut report)?;

    Ok(Sanitized { value, report })
}

/// Recursive scrub pass. `pointer` always holds the JSON Pointer of `value`.
fn scrub(
    value: Value,
    depth: usize,
    opts: &ScrubOptions,
    pointer: &mut String,
    report: &mut ScrubReport,
) -> Result<Value, ScrubError> {
    if depth > opts.max_depth {
        return Err(ScrubError::TooDeep {
            limit: opts.max_depth,
        });
    }

    match value {
        Value::String(s) => Ok(Value::String(scrub_string_value(s, pointer, report))),
        Value::Array(items) => scrub_array(items, depth, opts, pointer, report),
        Value::Object(members) => scrub_object(members, depth, opts, pointer, report),
        other => Ok(other),
    }
}

fn scrub_array(
    items: Vec<Value>,
    depth: usize,
    opts: &ScrubOptions,
    pointer: &mut String,
    report: &mut ScrubReport,
) -> Result<Value, ScrubError> {
    let mut scrubbed = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let len = pointer.len();
        pointer.push('/');
        pointer.push_str(&index.to_string());

        let item = scrub(item, depth + 1, opts, pointer, report)?;
        scrubbed.push(item);

        pointer.truncate(len);
    }

    Ok(Value::Array(scrubbed))
}

fn scrub_object(
    members: Map<String, Value>,
    depth: usize,
    opts: &ScrubOptions,
    pointer: &mut String,
    report: &mut ScrubReport,
) -> Result<Value, ScrubError> {
    let mut scrubbed = Map::new();

    for (key, value) in members {
        let (key, removed) = scrub_string(key);

        let len = pointer.len();
        pointer.push('/');
        pointer.push_str(&escape_pointer_token(&key));

        if removed > 0 {
            report.add(ScrubAction::new(
                ActionCode::KeyScrubbed,
                pointer.clone(),
                format!("removed {} control character(s) from key", removed),
            ));
        }

        // A scrubbed key can collide with a sibling. The entry later in map
        // iteration order wins, matching the last-wins convention serde_json
        // applies to duplicate keys at parse time.
        if scrubbed.contains_key(&key) {
            report.add(ScrubAction::new(
                ActionCode::DuplicateKeyDropped,
                pointer.clone(),
                "key collision after scrubbing; earlier member dropped",
            ));
        }

        let value = scrub(value, depth + 1, opts, pointer, report)?;
        scrubbed.insert(key, value);

        pointer.truncate(len);
    }

    Ok(Value::Object(scrubbed))
}

fn scrub_string_value(input: String, pointer: &str, report: &mut ScrubReport) -> String {
    let (cleaned, removed) = scrub_string(input);
    if removed > 0 {
        report.add(ScrubAction::new(
            ActionCode::ControlCharsStripped,
            pointer,
            format!("removed {} control character(s)", removed),
        ));
    }
    cleaned
}

/// Removes disallowed control characters, returning the cleaned string and
/// the number of characters removed. Clean strings pass through unchanged.
fn scrub_string(input: String) -> (String, usize) {
    let removed = input.chars().filter(|c| is_disallowed(*c)).count();
    if removed == 0 {
        return (input, 0);
    }

    let cleaned: String = input.chars().filter(|c| !is_disallowed(*c)).collect();
    (cleaned, removed)
}

/// C0 controls other than TAB/LF/CR, plus DEL, are stripped from strings.
fn is_disallowed(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}' | '\u{7F}')
}

/// Escapes a key for use as a JSON Pointer reference token (RFC 6901).
fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}
