//! Language registry
//!
//! Built once at startup and shared read-only by every request: each enabled
//! language gets its grammar and a color table derived from its highlight
//! queries plus any config overrides.

use std::collections::BTreeMap;

use tree_sitter::Language;

use super::highlights::HighlightTable;
use super::languages::LanguageId;
use crate::config::{LanguageOverrides, ServerConfig};

/// Grammar and color table for one language
pub struct LanguageEntry {
    pub id: LanguageId,
    pub grammar: Language,
    pub table: HighlightTable,
}

/// Immutable map from language id to its grammar and colors
pub struct LanguageRegistry {
    entries: BTreeMap<LanguageId, LanguageEntry>,
}

impl LanguageRegistry {
    /// Registry of every supported language with no overrides
    pub fn new() -> Self {
        Self::with_config(&ServerConfig::default())
    }

    pub fn with_config(config: &ServerConfig) -> Self {
        for name in config.languages.keys().chain(&config.disabled_languages) {
            if LanguageId::from_name(name).is_none() {
                tracing::warn!("Config mentions unknown language {:?}", name);
            }
        }

        let mut entries = BTreeMap::new();
        for id in LanguageId::ALL {
            if config.is_disabled(id) {
                tracing::info!("Language {} disabled by config", id);
                continue;
            }

            let mut table = build_table(id);
            if let Some(overrides) = config.overrides_for(id) {
                apply_overrides(&mut table, overrides);
            }
            tracing::debug!(
                "Loaded {} highlight table: {} symbols, {} keywords",
                id.display_name(),
                table.symbol_count(),
                table.keyword_count()
            );

            entries.insert(
                id,
                LanguageEntry {
                    id,
                    grammar: id.grammar(),
                    table,
                },
            );
        }

        Self { entries }
    }

    /// Look up a language by its protocol id
    pub fn get(&self, name: &str) -> Option<&LanguageEntry> {
        LanguageId::from_name(name).and_then(|id| self.entries.get(&id))
    }

    pub fn entry(&self, id: LanguageId) -> Option<&LanguageEntry> {
        self.entries.get(&id)
    }

    /// Enabled languages in id order
    pub fn languages(&self) -> impl Iterator<Item = LanguageId> + '_ {
        self.entries.keys().copied()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan each query layer, base first, letting later layers win.
///
/// A query that fails to scan is logged and skipped; the language stays
/// usable with whatever the other layers provide.
fn build_table(id: LanguageId) -> HighlightTable {
    let mut table = HighlightTable::default();
    for (layer, source) in id.highlight_queries().iter().enumerate() {
        match HighlightTable::from_query(source) {
            Ok(layer_table) => table.overlay(layer_table),
            Err(e) => {
                tracing::error!(
                    "Failed to scan highlight query layer {} for {}: {}",
                    layer,
                    id.display_name(),
                    e
                );
            }
        }
    }
    table
}

fn apply_overrides(table: &mut HighlightTable, overrides: &LanguageOverrides) {
    for (kind, color) in &overrides.symbols {
        table.insert_symbol(kind, color);
    }
    for (kind, color) in &overrides.keywords {
        table.insert_keyword(kind, color);
    }
}
