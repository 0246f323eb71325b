//! The core diagnostic type for the parser error system.
//!
//! A [`Diagnostic`] represents a single error or warning with an optional
//! source position.

use std::fmt;

use crate::error::{Position, Severity};

/// A diagnostic message with an optional source position.
///
/// Diagnostics describe problems found while parsing an annotation file:
/// - A severity level ([`Severity`])
/// - A message describing the issue
/// - An optional line/column [`Position`] in the source document
///
/// # Example
///
/// ```
/// use sextant_parser::error::{Diagnostic, Position};
///
/// let diag = Diagnostic::error("missing <size> element")
///     .with_position(Position::new(1, 1));
/// assert!(diag.severity().is_error());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    position: Option<Position>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source position, if any.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Set the source position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            position: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(position) = self.position {
            write!(f, " (at {position})")?;
        }
        Ok(())
    }
}
