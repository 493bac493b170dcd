//! Fallback chain configuration from TOML (`[router]` section)

use folio_domain::Model;
use serde::{Deserialize, Serialize};

/// Raw router configuration from TOML
///
/// # Example
///
/// ```toml
/// [router]
/// models = [
///     "meta-llama/llama-3.3-70b-instruct:free",
///     "qwen/qwen3-coder:free",
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRouterConfig {
    /// Model identifiers, highest priority first
    pub models: Vec<String>,
}

impl Default for FileRouterConfig {
    fn default() -> Self {
        Self {
            models: Model::default_fallback_chain()
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl FileRouterConfig {
    /// Parse the configured chain. Unknown names become `Model::Custom`.
    pub fn parse_models(&self) -> Vec<Model> {
        self.models.iter().map(|s| Model::from(s.trim())).collect()
    }
}
