//! Respond To Visitor use case
//!
//! Resolves a chat message to a reply. Canned answers win outright; anything
//! else walks the model fallback chain one attempt at a time:
//!
//! ```text
//! Start → CheckCanned → {Answered | TryModel(0)}
//! TryModel(i) → {Answered | TryModel(i+1) | AllFailed}
//! ```
//!
//! Terminal states are `Answered`, `AllFailed`, `ConfigError` and
//! `ClientInputError`. Nothing survives between calls.

use crate::config::RouterSettings;
use crate::ports::completion_gateway::{CompletionGateway, CompletionRequest, GatewayError};
use crate::ports::progress::{FallbackProgress, NoProgress};
use folio_domain::{
    CannedAnswer, Model, PromptTemplate, VisitorMessage, canned_answers, find_canned_answer,
    truncate,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors that can occur while routing a visitor message
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RespondError {
    /// Missing, non-string or blank message
    #[error("Message is required")]
    InvalidMessage,

    /// Provider credential absent; raised before any attempt
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Every model in the chain failed
    #[error("All {} models failed to respond", .attempts.len())]
    AllProvidersExhausted { attempts: Vec<AttemptRecord> },
}

/// Where a reply came from
#[derive(Debug, Clone, PartialEq)]
pub enum ReplySource {
    Canned,
    Model(Model),
}

/// Diagnostic record of one model attempt
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptRecord {
    pub model: Model,
    /// `None` when the attempt produced the answer
    pub error: Option<GatewayError>,
}

impl AttemptRecord {
    pub fn success(model: Model) -> Self {
        Self { model, error: None }
    }

    pub fn failure(model: Model, error: GatewayError) -> Self {
        Self {
            model,
            error: Some(error),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// A resolved reply plus the attempts that led to it
#[derive(Debug, Clone, PartialEq)]
pub struct VisitorReply {
    pub text: String,
    pub source: ReplySource,
    /// Empty for canned answers
    pub attempts: Vec<AttemptRecord>,
}

impl VisitorReply {
    fn canned(answer: &CannedAnswer) -> Self {
        Self {
            text: answer.answer.to_string(),
            source: ReplySource::Canned,
            attempts: Vec::new(),
        }
    }
}

/// Use case for answering a chat widget message
pub struct RespondToVisitorUseCase {
    gateway: Arc<dyn CompletionGateway>,
    canned: &'static [CannedAnswer],
    settings: RouterSettings,
}

impl RespondToVisitorUseCase {
    pub fn new(gateway: Arc<dyn CompletionGateway>, settings: RouterSettings) -> Self {
        Self {
            gateway,
            canned: canned_answers(),
            settings,
        }
    }

    /// Replace the canned answer table.
    pub fn with_canned_answers(mut self, canned: &'static [CannedAnswer]) -> Self {
        self.canned = canned;
        self
    }

    pub fn settings(&self) -> &RouterSettings {
        &self.settings
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, message: &str) -> Result<VisitorReply, RespondError> {
        self.execute_with_progress(message, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        message: &str,
        progress: &dyn FallbackProgress,
    ) -> Result<VisitorReply, RespondError> {
        let message = VisitorMessage::try_new(message).ok_or(RespondError::InvalidMessage)?;

        if let Some(hit) = find_canned_answer(self.canned, message.content()) {
            debug!("Canned answer for: {}", hit.question);
            let reply = VisitorReply::canned(hit);
            progress.on_answered(&reply.source);
            return Ok(reply);
        }

        if !self.gateway.has_credential() {
            error!("Completion provider credential is not configured");
            return Err(RespondError::Configuration(
                GatewayError::MissingCredential.to_string(),
            ));
        }

        let total = self.settings.models.len();
        info!(
            "Routing message through {} models: {}",
            total,
            truncate(message.content(), 80)
        );

        let mut attempts = Vec::with_capacity(total);

        for (index, model) in self.settings.models.iter().enumerate() {
            progress.on_attempt_start(model, index, total);
            let request = self.build_request(model, &message);

            match self.attempt(&request).await {
                Ok(text) => {
                    info!("Model {} answered", model);
                    attempts.push(AttemptRecord::success(model.clone()));
                    let source = ReplySource::Model(model.clone());
                    progress.on_answered(&source);
                    return Ok(VisitorReply {
                        text,
                        source,
                        attempts,
                    });
                }
                Err(e) => {
                    warn!("Model {} failed: {}", model, e);
                    progress.on_attempt_failed(model, &e);
                    attempts.push(AttemptRecord::failure(model.clone(), e));
                }
            }
        }

        error!("All {} models failed", attempts.len());
        progress.on_exhausted();
        Err(RespondError::AllProvidersExhausted { attempts })
    }

    fn build_request(&self, model: &Model, message: &VisitorMessage) -> CompletionRequest {
        CompletionRequest {
            model: model.clone(),
            system_prompt: PromptTemplate::persona_system().to_string(),
            user_message: PromptTemplate::visitor_turn(message.content()).to_string(),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        }
    }

    /// One bounded attempt. A timeout or blank answer counts as a failure.
    async fn attempt(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let call = self.gateway.complete(request);
        let result = match self.settings.attempt_timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(result) => result,
                Err(_) => Err(GatewayError::Timeout),
            },
            None => call.await,
        };

        match result {
            Ok(text) if text.trim().is_empty() => Err(GatewayError::EmptyContent),
            other => other,
        }
    }
}
