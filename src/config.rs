//! Server configuration
//!
//! Read once at startup from `~/.config/syntax-server/config.yaml`:
//!
//! ```yaml
//! languages:
//!   rust:
//!     symbols:
//!       macro_invocation: TSFuncMacro
//!     keywords:
//!       "unsafe": TSKeywordUnsafe
//! disabled_languages: [php]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::syntax::LanguageId;

/// Extra color mappings for one language, applied over the query-derived table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOverrides {
    /// Named node kind → color label
    #[serde(default)]
    pub symbols: BTreeMap<String, String>,
    /// Anonymous token → color label
    #[serde(default)]
    pub keywords: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Keyed by protocol language id (`rust`, `tsx`, ...)
    #[serde(default)]
    pub languages: BTreeMap<String, LanguageOverrides>,
    /// Languages to leave out of the registry entirely
    #[serde(default)]
    pub disabled_languages: Vec<String>,
}

impl ServerConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn is_disabled(&self, id: LanguageId) -> bool {
        self.disabled_languages.iter().any(|name| name == id.name())
    }

    pub fn overrides_for(&self, id: LanguageId) -> Option<&LanguageOverrides> {
        self.languages.get(id.name())
    }
}
