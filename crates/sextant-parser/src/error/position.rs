//! Source positions for diagnostics.

use std::fmt;

/// A line/column position in the source document, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    line: u32,
    column: u32,
}

impl Position {
    /// Create a position from 1-based line and column numbers.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The 1-based line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The 1-based column number.
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl From<roxmltree::TextPos> for Position {
    fn from(pos: roxmltree::TextPos) -> Self {
        Self::new(pos.row, pos.col)
    }
}
