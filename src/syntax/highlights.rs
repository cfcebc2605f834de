//! Highlight tables
//!
//! Per-language mappings from node kind to color label. Named nodes and
//! anonymous tokens live in separate maps because a grammar can use the same
//! string for both (e.g. a `string` production and a `"string"` keyword).

use std::collections::HashMap;

use super::query_scan::{scan_query, QueryScanError};

/// Color labels for one language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightTable {
    /// Named node kind → color
    symbols: HashMap<String, String>,
    /// Anonymous token → color
    keywords: HashMap<String, String>,
}

impl HighlightTable {
    /// Build a table from a single highlight query
    pub fn from_query(source: &str) -> Result<Self, QueryScanError> {
        let mut table = Self::default();
        for mapping in scan_query(source)? {
            let Some(color) = color_for_capture(&mapping.capture) else {
                continue;
            };
            let map = if mapping.named {
                &mut table.symbols
            } else {
                &mut table.keywords
            };
            map.entry(mapping.kind).or_insert(color);
        }
        Ok(table)
    }

    /// Color label for a node, or `""` when the kind is not highlighted
    pub fn color_for(&self, kind: &str, named: bool) -> &str {
        let map = if named { &self.symbols } else { &self.keywords };
        map.get(kind).map(String::as_str).unwrap_or("")
    }

    pub fn insert_symbol(&mut self, kind: &str, color: &str) {
        self.symbols.insert(kind.to_string(), color.to_string());
    }

    pub fn insert_keyword(&mut self, kind: &str, color: &str) {
        self.keywords.insert(kind.to_string(), color.to_string());
    }

    /// Layer `other` on top of this table; entries in `other` win.
    pub fn overlay(&mut self, other: HighlightTable) {
        self.symbols.extend(other.symbols);
        self.keywords.extend(other.keywords);
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty() && self.keywords.is_empty()
    }
}

/// Turn a capture name into a color label.
///
/// `keyword.function` → `TSKeywordFunction`, with `Punctuation` shortened to
/// `Punct` and `Constant` to `Const` unless it stands alone. Private captures
/// (`@_name`, used only by predicates) yield `None`.
pub fn color_for_capture(capture: &str) -> Option<String> {
    if capture.is_empty() || capture.starts_with('_') {
        return None;
    }

    let mut camel = String::with_capacity(capture.len());
    let mut upper_next = true;
    for c in capture.chars() {
        if c == '.' || c == '_' {
            upper_next = true;
        } else if upper_next {
            camel.extend(c.to_uppercase());
            upper_next = false;
        } else {
            camel.push(c);
        }
    }

    let mut camel = camel.replace("Punctuation", "Punct");
    if camel != "Constant" {
        camel = camel.replace("Constant", "Const");
    }
    Some(format!("TS{}", camel))
}
