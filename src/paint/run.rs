//! Colored runs and rendered lines

use super::position::Position;

/// A contiguous, non-empty segment of one line sharing one color label.
///
/// The empty label means "no highlighting".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run {
    /// A run of `length` bytes. `length` is always greater than zero.
    Finite { length: usize, color: String },
    /// A run covering everything from its start column to the end of the line.
    FillToLineEnd { color: String },
}

impl Run {
    pub fn color(&self) -> &str {
        match self {
            Run::Finite { color, .. } | Run::FillToLineEnd { color } => color,
        }
    }

    /// Byte length of a finite run, `None` for a fill run
    pub fn length(&self) -> Option<usize> {
        match self {
            Run::Finite { length, .. } => Some(*length),
            Run::FillToLineEnd { .. } => None,
        }
    }

    pub fn is_fill(&self) -> bool {
        matches!(self, Run::FillToLineEnd { .. })
    }
}

/// Runs of a single source line, left to right, already merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub runs: Vec<Run>,
}

impl Line {
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Append a run, merging it into the last run when the colors match.
    ///
    /// Merging a fill run into a finite one turns the result into a fill run.
    pub(crate) fn push(&mut self, run: Run) {
        debug_assert!(
            !self.fills_to_end(),
            "run appended after fill-to-line-end"
        );
        if self.fills_to_end() {
            return;
        }
        if let Some(last) = self.runs.last_mut() {
            if last.color() == run.color() {
                match (last, run) {
                    (Run::Finite { length, .. }, Run::Finite { length: extra, .. }) => {
                        *length += extra;
                    }
                    (last, Run::FillToLineEnd { color }) => {
                        *last = Run::FillToLineEnd { color };
                    }
                    (Run::FillToLineEnd { .. }, Run::Finite { .. }) => {}
                }
                return;
            }
        }
        self.runs.push(run);
    }

    /// Sum of the finite run lengths on this line.
    pub fn finite_width(&self) -> usize {
        self.runs.iter().filter_map(Run::length).sum()
    }

    /// Whether the line ends with a fill-to-line-end run.
    pub fn fills_to_end(&self) -> bool {
        self.runs.last().is_some_and(Run::is_fill)
    }
}

/// Output of a single highlight request.
///
/// `lines[i]` describes source row `origin.row + i`. The first line starts at
/// `origin.column`, every later line at column 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedLines {
    pub origin: Position,
    pub lines: Vec<Line>,
}

impl RenderedLines {
    /// Absolute row of the line at `index`
    pub fn row_of(&self, index: usize) -> usize {
        self.origin.row + index
    }

    /// Column at which the line at `index` starts
    pub fn start_column_of(&self, index: usize) -> usize {
        if index == 0 {
            self.origin.column
        } else {
            0
        }
    }
}
