//! Router settings: chat fallback chain control.
//!
//! [`RouterSettings`] groups the static parameters that control
//! [`RespondToVisitorUseCase`](crate::use_cases::respond_to_visitor::RespondToVisitorUseCase).
//! These are application-layer concerns, not domain policy.

use folio_domain::Model;
use std::time::Duration;

/// Fallback chain control parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RouterSettings {
    /// Models to try, highest priority first.
    pub models: Vec<Model>,
    /// Upper bound on generated tokens per attempt.
    pub max_tokens: u32,
    /// Sampling temperature per attempt.
    pub temperature: f32,
    /// Bound on a single attempt; `None` waits for the provider.
    pub attempt_timeout: Option<Duration>,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            models: Model::default_fallback_chain(),
            max_tokens: 500,
            temperature: 0.7,
            attempt_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl RouterSettings {
    // ==================== Builder Methods ====================

    pub fn with_models(mut self, models: Vec<Model>) -> Self {
        self.models = models;
        self
    }

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_attempt_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.attempt_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RouterSettings::default();
        assert_eq!(settings.models, Model::default_fallback_chain());
        assert_eq!(settings.max_tokens, 500);
        assert!((settings.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(settings.attempt_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_builder_chain() {
        let settings = RouterSettings::default()
            .with_models(vec![Model::from("a"), Model::from("b")])
            .with_max_tokens(64)
            .with_temperature(0.2)
            .with_attempt_timeout(None);
        assert_eq!(settings.models.len(), 2);
        assert_eq!(settings.max_tokens, 64);
        assert_eq!(settings.attempt_timeout, None);
    }
}
