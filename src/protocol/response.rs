//! Response encoding
//!
//! Every response is a two-element JSON array: the command name followed by
//! its payload.

use serde::ser::{SerializeTuple, Serializer};
use serde::Serialize;

use crate::paint::{Position, RenderedLines, Run};
use crate::syntax::NodeSpan;

/// Wire length of a fill-to-line-end run
pub const FILL_TO_LINE_END: usize = 0;

const NOT_FOUND: &str = "not found";

/// One colored run as the editor receives it. `row` and `col` are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireRun {
    pub row: usize,
    pub col: usize,
    pub length: usize,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WirePoint {
    pub row: usize,
    pub column: usize,
}

impl From<Position> for WirePoint {
    fn from(pos: Position) -> Self {
        Self {
            row: pos.row,
            column: pos.column,
        }
    }
}

/// Node found by a point lookup, 0-based
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireNode {
    #[serde(rename = "type")]
    pub kind: String,
    pub start: WirePoint,
    pub end: WirePoint,
}

impl From<NodeSpan> for WireNode {
    fn from(span: NodeSpan) -> Self {
        Self {
            kind: span.kind,
            start: span.start.into(),
            end: span.end.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Version(String),
    Syntax(Vec<Vec<WireRun>>),
    TextObj(Option<WireNode>),
    Error(String),
}

impl Response {
    pub fn invalid_command() -> Self {
        Response::Error("invalid command".to_string())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Response::Version(_) => "version",
            Response::Syntax(_) => "syntax",
            Response::TextObj(_) => "textobj",
            Response::Error(_) => "error",
        }
    }

    /// Encode as a single JSON line, without the trailing newline
    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Serialize for Response {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(self.name())?;
        match self {
            Response::Version(version) => tuple.serialize_element(version)?,
            Response::Syntax(lines) => tuple.serialize_element(lines)?,
            Response::TextObj(Some(node)) => tuple.serialize_element(node)?,
            Response::TextObj(None) => tuple.serialize_element(NOT_FOUND)?,
            Response::Error(message) => tuple.serialize_element(message)?,
        }
        tuple.end()
    }
}

/// Lay rendered lines out in absolute, 1-based editor coordinates.
///
/// Finite runs advance the column; a fill run is sent with length
/// [`FILL_TO_LINE_END`] and always ends its line.
pub fn encode_lines(rendered: &RenderedLines) -> Vec<Vec<WireRun>> {
    rendered
        .lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let row = rendered.row_of(index) + 1;
            let mut col = rendered.start_column_of(index) + 1;
            line.runs
                .iter()
                .map(|run| {
                    let length = match run {
                        Run::Finite { length, .. } => *length,
                        Run::FillToLineEnd { .. } => FILL_TO_LINE_END,
                    };
                    let wire = WireRun {
                        row,
                        col,
                        length,
                        color: run.color().to_string(),
                    };
                    col += length;
                    wire
                })
                .collect()
        })
        .collect()
}
