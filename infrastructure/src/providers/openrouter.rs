//! OpenRouter chat-completions adapter
//!
//! Sends one non-streaming `POST {base_url}/chat/completions` per attempt and
//! reads the answer from `choices[0].message.content`. Any OpenAI-compatible
//! endpoint works; OpenRouter additionally reads the `HTTP-Referer` and
//! `X-Title` attribution headers.

use crate::config::FileProviderConfig;
use async_trait::async_trait;
use folio_application::{CompletionGateway, CompletionRequest, GatewayError};
use folio_domain::truncate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Longest provider error body kept in a [`GatewayError::Status`]
const MAX_ERROR_BODY: usize = 200;

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Extract the answer text from a chat-completions response body.
///
/// Unparsable JSON is a [`GatewayError::MalformedPayload`]; a missing, null
/// or blank `choices[0].message.content` is a [`GatewayError::EmptyContent`].
pub fn extract_content(body: &str) -> Result<String, GatewayError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::MalformedPayload(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(GatewayError::EmptyContent)
}

/// [`CompletionGateway`] backed by the OpenRouter HTTP API
pub struct OpenRouterGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    referer: Option<String>,
    title: Option<String>,
}

impl OpenRouterGateway {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key,
            referer: None,
            title: None,
        }
    }

    /// Build from the `[provider]` section, resolving the credential from the
    /// environment.
    pub fn from_config(config: &FileProviderConfig) -> Self {
        let mut gateway = Self::new(&config.base_url, config.resolve_api_key());
        gateway.referer = config.referer.clone();
        gateway.title = config.title.clone();
        gateway
    }

    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionGateway for OpenRouterGateway {
    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GatewayError::MissingCredential)?;

        let body = ChatCompletionBody {
            model: request.model.as_str(),
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_message,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let mut builder = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body);
        if let Some(referer) = &self.referer {
            builder = builder.header("HTTP-Referer", referer);
        }
        if let Some(title) = &self.title {
            builder = builder.header("X-Title", title);
        }

        debug!("POST {} (model: {})", self.endpoint, request.model);

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else {
                GatewayError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: truncate(&text, MAX_ERROR_BODY),
            });
        }

        extract_content(&text)
    }
}
