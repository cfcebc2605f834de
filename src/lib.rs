//! syntax-server - tree-sitter highlighting for editors
//!
//! This crate parses source text with tree-sitter, flattens the colored
//! syntax tree into per-line runs and serves the result over a line-delimited
//! JSON protocol.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod paint;
pub mod protocol;
pub mod syntax;
pub mod tracing;

// Re-export commonly used types
pub use config::ServerConfig;
pub use paint::{Line, Position, RenderedLines, Run, SpanFlattener};
pub use protocol::{Request, Response, Server};
pub use syntax::{LanguageId, LanguageRegistry, SyntaxParser};

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Source revision, set by release builds through `SYNTAX_SERVER_REVISION`
pub const REVISION: &str = match option_env!("SYNTAX_SERVER_REVISION") {
    Some(rev) => rev,
    None => "HEAD",
};
