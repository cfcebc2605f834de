//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use syntax_server::paint::{Line, Run};
use syntax_server::{LanguageRegistry, RenderedLines, Server, SyntaxParser};

/// Feed `input` through a fresh server and collect the response lines
pub fn serve(input: &str) -> Vec<String> {
    let registry = LanguageRegistry::new();
    serve_with(&registry, input)
}

pub fn serve_with(registry: &LanguageRegistry, input: &str) -> Vec<String> {
    let mut server = Server::new(registry);
    let mut out = Vec::new();
    server
        .serve(input.as_bytes(), &mut out)
        .expect("serve loop failed");
    String::from_utf8(out)
        .expect("non-UTF-8 output")
        .lines()
        .map(str::to_string)
        .collect()
}

/// One request line, JSON-encoded
pub fn request(items: &[serde_json::Value]) -> String {
    let mut line = serde_json::to_string(items).expect("encode request");
    line.push('\n');
    line
}

pub fn highlight(registry: &LanguageRegistry, lang: &str, source: &str) -> RenderedLines {
    let entry = registry
        .get(lang)
        .unwrap_or_else(|| panic!("{} not registered", lang));
    SyntaxParser::new()
        .highlight(entry, source)
        .unwrap_or_else(|e| panic!("highlighting {} failed: {}", lang, e))
}

/// Source lines without their terminators, matching rendered line indices
pub fn source_lines(source: &str) -> Vec<&str> {
    source.split('\n').collect()
}

/// Check the merge, fill placement and coverage rules for one rendered line.
///
/// `width` is the byte length of the source line, `start` the column the
/// rendered line begins at, `wraps` whether a newline follows the line.
pub fn assert_line_rules(line: &Line, start: usize, width: usize, wraps: bool, context: &str) {
    for pair in line.runs.windows(2) {
        assert_ne!(
            pair[0].color(),
            pair[1].color(),
            "{}: adjacent runs share a color: {:?}",
            context,
            line
        );
    }
    for (i, run) in line.runs.iter().enumerate() {
        match run {
            Run::Finite { length, .. } => assert!(*length > 0, "{}: zero-length run", context),
            Run::FillToLineEnd { .. } => assert_eq!(
                i,
                line.runs.len() - 1,
                "{}: fill run is not last: {:?}",
                context,
                line
            ),
        }
    }

    let covered = start + line.finite_width();
    if wraps {
        assert!(
            line.fills_to_end(),
            "{}: wrapped line must end in a fill run: {:?}",
            context,
            line
        );
        assert!(
            covered <= width,
            "{}: runs cover {} of {} bytes",
            context,
            covered,
            width
        );
    } else {
        assert!(!line.fills_to_end(), "{}: last line fills: {:?}", context, line);
        assert_eq!(covered, width, "{}: last line not fully covered", context);
    }
}
