//! Error and diagnostic system for the annotation parser.
//!
//! This module provides the parser's error handling:
//! - [`Diagnostic`] - a single error or warning with an optional source
//!   position
//! - [`Severity`] - whether a diagnostic is fatal for the file or advisory
//! - [`ParseError`] - one or more diagnostics returned from a failed parse
//!
//! # Overview
//!
//! A parse produces two kinds of problems. Fatal problems (unreadable file,
//! malformed XML, missing `<size>`) abort the whole file and surface as a
//! [`ParseError`]. Advisory problems (a single malformed `<object>`) skip
//! that object only and are reported as warning diagnostics alongside the
//! successfully parsed diagram.
//!
//! # Example
//!
//! ```
//! use sextant_parser::error::{Diagnostic, Position};
//!
//! let diag = Diagnostic::warning("skipping object: missing <boundary>")
//!     .with_position(Position::new(12, 5));
//! assert_eq!(diag.to_string(), "warning: skipping object: missing <boundary> (at 12:5)");
//! ```

mod diagnostic;
mod parse_error;
mod position;
mod severity;

pub use diagnostic::Diagnostic;
pub use parse_error::ParseError;
pub use position::Position;
pub use severity::Severity;
