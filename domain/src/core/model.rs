//! Model value object representing a hosted completion model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Hosted completion models (Value Object)
///
/// The chat router tries these in priority order until one answers.
/// Identifiers are opaque to the domain; anything not listed here is
/// carried as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Llama33Instruct70b,
    Qwen3Coder,
    NemotronNano9bV2,
    Llama32Instruct3b,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama33Instruct70b => "meta-llama/llama-3.3-70b-instruct:free",
            Model::Qwen3Coder => "qwen/qwen3-coder:free",
            Model::NemotronNano9bV2 => "nvidia/nemotron-nano-9b-v2:free",
            Model::Llama32Instruct3b => "meta-llama/llama-3.2-3b-instruct:free",
            Model::Custom(s) => s,
        }
    }

    /// Default fallback chain, highest priority first
    pub fn default_fallback_chain() -> Vec<Model> {
        vec![
            Model::Llama33Instruct70b,
            Model::Qwen3Coder,
            Model::NemotronNano9bV2,
            Model::Llama32Instruct3b,
        ]
    }

    /// Check if this is a free-tier model (`:free` suffix)
    pub fn is_free_tier(&self) -> bool {
        self.as_str().ends_with(":free")
    }
}

impl Default for Model {
    /// Returns the head of the default fallback chain
    fn default() -> Self {
        Model::Llama33Instruct70b
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "meta-llama/llama-3.3-70b-instruct:free" => Model::Llama33Instruct70b,
            "qwen/qwen3-coder:free" => Model::Qwen3Coder,
            "nvidia/nemotron-nano-9b-v2:free" => Model::NemotronNano9bV2,
            "meta-llama/llama-3.2-3b-instruct:free" => Model::Llama32Instruct3b,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chain_order() {
        let chain = Model::default_fallback_chain();
        let ids: Vec<_> = chain.iter().map(Model::as_str).collect();
        assert_eq!(
            ids,
            vec![
                "meta-llama/llama-3.3-70b-instruct:free",
                "qwen/qwen3-coder:free",
                "nvidia/nemotron-nano-9b-v2:free",
                "meta-llama/llama-3.2-3b-instruct:free",
            ]
        );
        assert!(chain.iter().all(Model::is_free_tier));
    }

    #[test]
    fn test_known_identifier_parses_to_variant() {
        let model: Model = "qwen/qwen3-coder:free".parse().unwrap();
        assert_eq!(model, Model::Qwen3Coder);
    }

    #[test]
    fn test_custom_model() {
        let model = Model::from("openai/gpt-4o-mini");
        assert_eq!(model, Model::Custom("openai/gpt-4o-mini".to_string()));
        assert_eq!(model.to_string(), "openai/gpt-4o-mini");
        assert!(!model.is_free_tier());
    }

    #[test]
    fn test_serde_uses_identifier_string() {
        let json = serde_json::to_string(&Model::NemotronNano9bV2).unwrap();
        assert_eq!(json, "\"nvidia/nemotron-nano-9b-v2:free\"");
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Model::NemotronNano9bV2);
    }
}
