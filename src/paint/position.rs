//! Row/column positions
//!
//! Columns count bytes, the same unit tree-sitter reports in `Point::column`.

use std::fmt;

/// A zero-based (row, column) position in a document.
///
/// Ordering is row-major, so `Position::new(1, 0) > Position::new(0, 99)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Position just past the last byte of `text`.
    ///
    /// A trailing newline puts the end at column 0 of the following row.
    pub fn end_of(text: &str) -> Self {
        let row = text.bytes().filter(|&b| b == b'\n').count();
        let column = match text.rfind('\n') {
            Some(idx) => text.len() - idx - 1,
            None => text.len(),
        };
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

impl From<tree_sitter::Point> for Position {
    fn from(point: tree_sitter::Point) -> Self {
        Self {
            row: point.row,
            column: point.column,
        }
    }
}

impl From<Position> for tree_sitter::Point {
    fn from(pos: Position) -> Self {
        tree_sitter::Point {
            row: pos.row,
            column: pos.column,
        }
    }
}
