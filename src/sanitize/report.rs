//! Scrub report types for structured change reporting.
//!
//! Sanitization never fails because of a fixable problem; it fixes the
//! problem and records what it did. This module provides the structured
//! record of those changes, displayable to users or serialized to JSON for
//! programmatic use.

use std::fmt;

use serde::Serialize;

/// The result of sanitizing a document: every change that was applied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScrubReport {
    /// All actions applied during sanitization, in document order.
    pub actions: Vec<ScrubAction>,
}

impl ScrubReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Adds an action to the report.
    pub fn add(&mut self, action: ScrubAction) {
        self.actions.push(action);
    }

    /// Returns the number of actions applied.
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if sanitization changed nothing.
    pub fn is_clean(&self) -> bool {
        self.actions.is_empty()
    }
}

impl fmt::Display for ScrubReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.actions.is_empty() {
            return writeln!(f, "Sanitization made no changes");
        }

        writeln!(
            f,
            "Sanitization applied {} change(s):",
            self.action_count()
        )?;
        writeln!(f)?;

        for action in &self.actions {
            writeln!(f, "  {}", action)?;
        }

        Ok(())
    }
}

/// A single change applied during sanitization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScrubAction {
    /// A stable code for the kind of change.
    pub code: ActionCode,

    /// JSON Pointer (RFC 6901) to the affected node; empty for the root.
    pub pointer: String,

    /// A human-readable description of the change.
    pub message: String,
}

impl ScrubAction {
    /// Creates a new action record.
    pub fn new(code: ActionCode, pointer: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            pointer: pointer.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ScrubAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = if self.pointer.is_empty() {
            "(root)"
        } else {
            &self.pointer
        };
        write!(f, "[{:?}] {}: {}", self.code, location, self.message)
    }
}

/// Stable codes for the kinds of change the sanitizer applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ActionCode {
    /// Disallowed control characters were removed from a string value.
    ControlCharsStripped,
    /// Disallowed control characters were removed from an object key.
    KeyScrubbed,
    /// Two keys collided after scrubbing; the earlier member was dropped.
    DuplicateKeyDropped,
}
