//! Span flattening engine
//!
//! Converts a tree of nested color annotations into per-line, run-length
//! encoded colored runs.
//!
//! ## Architecture
//!
//! ```text
//! tree + HighlightTable → walker::walk → start/end/advance_to
//!                       → SpanFlattener → RenderedLines
//! ```
//!
//! Every rendered line obeys three rules:
//!
//! - runs are contiguous and cover the line from its start column
//! - no two adjacent runs share a color label
//! - a fill-to-line-end run, if present, is the last run

mod flattener;
mod position;
mod run;
mod walker;

pub use flattener::{FlattenError, SpanFlattener};
pub use position::Position;
pub use run::{Line, RenderedLines, Run};
pub use walker::{paint, walk, SyntaxNode};

