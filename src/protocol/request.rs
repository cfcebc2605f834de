//! Request decoding
//!
//! Each input line is a JSON array whose first element names the command.

use serde_json::Value;

use crate::paint::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// `["version"]`
    Version,
    /// `["syntax", language, source]`
    Syntax { language: String, source: String },
    /// `["textobj", language, source, col, row]`
    TextObj {
        language: String,
        source: String,
        point: Position,
    },
    /// A JSON array that isn't a known command with the right arguments
    Invalid,
}

impl Request {
    /// Decode one input line.
    ///
    /// Returns `None` for lines that aren't JSON arrays; those are dropped
    /// without a response.
    pub fn decode(line: &str) -> Option<Self> {
        let items: Vec<Value> = serde_json::from_str(line).ok()?;
        Some(Self::from_items(&items))
    }

    fn from_items(items: &[Value]) -> Self {
        let Some(command) = items.first().and_then(Value::as_str) else {
            return Request::Invalid;
        };

        match (command, items) {
            ("version", _) => Request::Version,
            ("syntax", [_, Value::String(language), Value::String(source)]) => Request::Syntax {
                language: language.clone(),
                source: source.clone(),
            },
            ("textobj", [_, Value::String(language), Value::String(source), col, row]) => {
                match (coordinate(col), coordinate(row)) {
                    (Some(column), Some(row)) => Request::TextObj {
                        language: language.clone(),
                        source: source.clone(),
                        point: Position::new(row, column),
                    },
                    _ => Request::Invalid,
                }
            }
            _ => Request::Invalid,
        }
    }
}

/// Read a 0-based coordinate sent either as a number or as a numeric string.
///
/// Strings that don't parse read as 0, the way the editor plugin has always
/// been answered.
fn coordinate(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
        Value::String(s) => Some(s.trim().parse().unwrap_or(0)),
        _ => None,
    }
}
