//! Syntax module
//!
//! Provides tree-sitter based parsing and the color tables the span flattener
//! paints with:
//! - Language ids and their grammars
//! - Highlight tables derived from each grammar's `highlights.scm`
//! - A registry built once at startup and shared by all requests
//! - A reusable parser for highlight and point lookup requests
//!
//! ## Architecture
//!
//! ```text
//! highlights.scm → query_scan → HighlightTable ─┐
//!                         ServerConfig overrides ┴→ LanguageRegistry
//! request → SyntaxParser::highlight → paint → RenderedLines
//! ```

mod highlights;
mod languages;
mod parser;
mod query_scan;
mod registry;

pub use highlights::{color_for_capture, HighlightTable};
pub use languages::LanguageId;
pub use parser::{HighlightError, NodeSpan, SyntaxParser};
pub use query_scan::{scan_query, QueryMapping, QueryScanError};
pub use registry::{LanguageEntry, LanguageRegistry};
