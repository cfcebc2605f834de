//! Tree-sitter parsing for highlight and point lookup requests
//!
//! One `Parser` is reused across requests. Its reset contract: every call to
//! [`SyntaxParser::parse`] resets the parser and rebinds it to the requested
//! grammar before parsing, so nothing carries over from the previous request.

use std::fmt;

use tree_sitter::{Parser, Tree};

use super::languages::LanguageId;
use super::registry::LanguageEntry;
use crate::paint::{paint, FlattenError, Position, RenderedLines};

/// Failures while serving a single highlight or lookup request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightError {
    /// The grammar could not be loaded into the parser (ABI mismatch)
    Language { language: LanguageId, message: String },
    /// The parser gave up without producing a tree
    Parse { language: LanguageId },
    /// The tree did not flatten cleanly
    Flatten(FlattenError),
}

impl HighlightError {
    /// Grammar and parser failures end the request loop; flattening failures
    /// only abort the request they occurred in.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Flatten(_))
    }
}

impl fmt::Display for HighlightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Language { language, message } => {
                write!(f, "failed to load {} grammar: {}", language, message)
            }
            Self::Parse { language } => write!(f, "failed to parse {} source", language),
            Self::Flatten(e) => write!(f, "failed to flatten highlights: {}", e),
        }
    }
}

impl std::error::Error for HighlightError {}

impl From<FlattenError> for HighlightError {
    fn from(e: FlattenError) -> Self {
        Self::Flatten(e)
    }
}

/// The smallest named node around a point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpan {
    pub kind: String,
    pub start: Position,
    pub end: Position,
}

/// Reusable parser handle
pub struct SyntaxParser {
    parser: Parser,
}

impl SyntaxParser {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    /// Parse `source` with the entry's grammar
    pub fn parse(&mut self, entry: &LanguageEntry, source: &str) -> Result<Tree, HighlightError> {
        self.parser.reset();
        self.parser
            .set_language(&entry.grammar)
            .map_err(|e| HighlightError::Language {
                language: entry.id,
                message: e.to_string(),
            })?;
        self.parser
            .parse(source, None)
            .ok_or(HighlightError::Parse { language: entry.id })
    }

    /// Parse and flatten `source` into colored lines
    pub fn highlight(
        &mut self,
        entry: &LanguageEntry,
        source: &str,
    ) -> Result<RenderedLines, HighlightError> {
        let tree = self.parse(entry, source)?;
        let rendered = paint(tree.root_node(), &entry.table, Position::end_of(source))?;
        tracing::debug!(
            "Highlighted {} bytes of {} into {} lines",
            source.len(),
            entry.id,
            rendered.lines.len()
        );
        Ok(rendered)
    }

    /// Find the smallest named node containing `point`
    pub fn node_at(
        &mut self,
        entry: &LanguageEntry,
        source: &str,
        point: Position,
    ) -> Result<Option<NodeSpan>, HighlightError> {
        let tree = self.parse(entry, source)?;
        let node = tree
            .root_node()
            .named_descendant_for_point_range(point.into(), point.into());
        Ok(node.map(|node| NodeSpan {
            kind: node.kind().to_string(),
            start: node.start_position().into(),
            end: node.end_position().into(),
        }))
    }
}

impl Default for SyntaxParser {
    fn default() -> Self {
        Self::new()
    }
}
