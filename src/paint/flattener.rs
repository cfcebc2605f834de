//! Span flattening
//!
//! Turns nested, possibly multi-line color spans into per-line runs in a single
//! pass. The caller feeds `start`/`end` events in tree order; each event first
//! paints everything between the cursor and the event position with the color
//! currently on top of the stack, then pushes or pops.
//!
//! ```text
//! start(A, 0:0)  start(B, 0:3)  end(0:6)  end(0:10)
//!                ^ paints [0,3) A          ^ paints [6,10) A
//!                               ^ paints [3,6) B
//! ```

use std::fmt;

use super::position::Position;
use super::run::{Line, RenderedLines, Run};

/// Violations of the flattener's contract.
///
/// These indicate a walker bug or a tree that does not nest properly, never a
/// user-facing condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlattenError {
    /// An advance targeted a position before the cursor
    CursorRegression { cursor: Position, target: Position },
    /// `end` was called with only the sentinel color on the stack
    StackUnderflow { at: Position },
    /// `render` was called with unclosed spans
    Unbalanced { depth: usize },
}

impl fmt::Display for FlattenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CursorRegression { cursor, target } => {
                write!(f, "cannot advance backwards from {} to {}", cursor, target)
            }
            Self::StackUnderflow { at } => write!(f, "unbalanced span end at {}", at),
            Self::Unbalanced { depth } => {
                write!(f, "{} span(s) still open at render", depth - 1)
            }
        }
    }
}

impl std::error::Error for FlattenError {}

/// Single-use paint state for one highlight request
#[derive(Debug)]
pub struct SpanFlattener {
    cursor: Position,
    origin: Position,
    /// Bottom entry is the permanent "" sentinel
    colors: Vec<String>,
    line: Line,
    lines: Vec<Line>,
}

impl SpanFlattener {
    /// Create a flattener whose cursor starts at `origin` (the root node's start)
    pub fn new(origin: Position) -> Self {
        Self {
            cursor: origin,
            origin,
            colors: vec![String::new()],
            line: Line::default(),
            lines: Vec::new(),
        }
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Number of colors on the stack, sentinel included
    pub fn depth(&self) -> usize {
        self.colors.len()
    }

    fn top(&self) -> &str {
        self.colors.last().map(String::as_str).unwrap_or_default()
    }

    /// Paint from the cursor up to `target` with the current top color.
    pub fn advance_to(&mut self, target: Position) -> Result<(), FlattenError> {
        if target < self.cursor {
            return Err(FlattenError::CursorRegression {
                cursor: self.cursor,
                target,
            });
        }

        while target.row > self.cursor.row {
            let color = self.top().to_string();
            self.line.push(Run::FillToLineEnd { color });
            self.lines.push(std::mem::take(&mut self.line));
            self.cursor = Position::new(self.cursor.row + 1, 0);
        }

        if target.column > self.cursor.column {
            let run = Run::Finite {
                length: target.column - self.cursor.column,
                color: self.top().to_string(),
            };
            self.line.push(run);
            self.cursor.column = target.column;
        }

        Ok(())
    }

    /// Open a span of `color` at `pos`.
    pub fn start(&mut self, color: &str, pos: Position) -> Result<(), FlattenError> {
        self.advance_to(pos)?;
        self.colors.push(color.to_string());
        Ok(())
    }

    /// Close the innermost open span at `pos`.
    pub fn end(&mut self, pos: Position) -> Result<(), FlattenError> {
        if self.colors.len() <= 1 {
            return Err(FlattenError::StackUnderflow { at: pos });
        }
        self.advance_to(pos)?;
        self.colors.pop();
        Ok(())
    }

    /// Consume the flattener and return the painted lines.
    ///
    /// A non-empty partial last line is included; advance to the document end
    /// first so no trailing text is left uncovered.
    pub fn render(mut self) -> Result<RenderedLines, FlattenError> {
        if self.colors.len() != 1 {
            return Err(FlattenError::Unbalanced {
                depth: self.colors.len(),
            });
        }
        if !self.line.is_empty() {
            self.lines.push(self.line);
        }
        Ok(RenderedLines {
            origin: self.origin,
            lines: self.lines,
        })
    }
}
