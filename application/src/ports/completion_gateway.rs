//! Completion Gateway port
//!
//! Defines the interface for sending one chat-completion request to a hosted
//! model provider.

use async_trait::async_trait;
use folio_domain::Model;
use thiserror::Error;

/// Why a single completion attempt did not produce an answer
///
/// Every variant except [`GatewayError::MissingCredential`] is an attempt
/// failure: the router logs it and moves on to the next model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("No content in response")]
    EmptyContent,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Timeout")]
    Timeout,

    #[error("Provider credential is not configured")]
    MissingCredential,
}

/// One completion call: a fixed system turn plus the visitor's message
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: Model,
    pub system_prompt: String,
    pub user_message: String,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Gateway to a hosted completion provider
///
/// This port defines how the application layer talks to the model provider.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Whether a credential is available; checked before any attempt
    fn has_credential(&self) -> bool;

    /// Send one request and return the non-empty answer text
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}
