//! Severity levels for diagnostics.
//!
//! This module defines the severity of diagnostic messages, distinguishing
//! between problems that abort a file and advisory per-object reports.

use std::fmt;

/// The severity level of a diagnostic.
///
/// Severity determines how the diagnostic should be handled:
/// - [`Severity::Error`] indicates a problem that is fatal for the file
/// - [`Severity::Warning`] indicates a skipped record that did not abort
///   the rest of the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A fatal problem that prevents the file from loading.
    Error,

    /// A non-fatal problem; the affected object was skipped and parsing
    /// continued with its siblings.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}
