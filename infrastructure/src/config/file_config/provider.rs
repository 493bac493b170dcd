//! Completion provider configuration from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};

/// OpenRouter-compatible provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL of the chat-completions API.
    pub base_url: String,
    /// Environment variable name for the API key (default: "OPENROUTER_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Attribution sent as `HTTP-Referer`.
    pub referer: Option<String>,
    /// Attribution sent as `X-Title`.
    pub title: Option<String>,
    /// Max tokens per response (default: 500).
    pub max_tokens: u32,
    /// Sampling temperature (default: 0.7).
    pub temperature: f32,
    /// Bound on a single model attempt, in seconds.
    pub timeout_seconds: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            api_key_env: "OPENROUTER_API_KEY".to_string(),
            api_key: None,
            referer: Some("https://danu-portfolio.vercel.app".to_string()),
            title: Some("Danu Portfolio ChatBot".to_string()),
            max_tokens: 500,
            temperature: 0.7,
            timeout_seconds: 30,
        }
    }
}

impl FileProviderConfig {
    /// Resolve the API key from the process environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key: an explicit `api_key` wins, otherwise the
    /// variable named by `api_key_env` is looked up. Blank values count as
    /// unset.
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| lookup(&self.api_key_env))
            .filter(|key| !key.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileProviderConfig::default();
        assert_eq!(config.api_key_env, "OPENROUTER_API_KEY");
        assert_eq!(config.max_tokens, 500);
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_resolve_api_key_from_env_var() {
        let config = FileProviderConfig::default();
        let key = config.resolve_api_key_with(|name| {
            (name == "OPENROUTER_API_KEY").then(|| "sk-or-env".to_string())
        });
        assert_eq!(key.as_deref(), Some("sk-or-env"));
    }

    #[test]
    fn test_explicit_api_key_wins() {
        let config = FileProviderConfig {
            api_key: Some("sk-or-file".to_string()),
            ..Default::default()
        };
        let key = config.resolve_api_key_with(|_| Some("sk-or-env".to_string()));
        assert_eq!(key.as_deref(), Some("sk-or-file"));
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let config = FileProviderConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.resolve_api_key_with(|_| Some(String::new())).is_none());
        assert!(config.resolve_api_key_with(|_| None).is_none());
    }

    #[test]
    fn test_custom_env_var_name() {
        let config = FileProviderConfig {
            api_key_env: "MY_KEY".to_string(),
            ..Default::default()
        };
        let key = config.resolve_api_key_with(|name| (name == "MY_KEY").then(|| "k".to_string()));
        assert_eq!(key.as_deref(), Some("k"));
    }
}
