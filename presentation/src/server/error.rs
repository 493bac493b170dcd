//! HTTP error responses
//!
//! Maps router failures to the status codes and fixed messages visitors see.
//! Per-model failure detail stays in the logs.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_application::RespondError;
use serde_json::json;

pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const COMMAND_REQUIRED: &str = "Command is required";
pub const CONFIGURATION_ERROR: &str = "API configuration error";
pub const ALL_MODELS_UNAVAILABLE: &str =
    "All AI models are currently unavailable. Please try again later.";

/// Error body `{"error": ...}` with its status
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

impl ApiError {
    pub fn bad_request(message: &'static str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }
}

impl From<RespondError> for ApiError {
    fn from(err: RespondError) -> Self {
        match err {
            RespondError::InvalidMessage => Self::bad_request(MESSAGE_REQUIRED),
            RespondError::Configuration(_) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: CONFIGURATION_ERROR,
            },
            RespondError::AllProvidersExhausted { .. } => Self {
                status: StatusCode::BAD_GATEWAY,
                message: ALL_MODELS_UNAVAILABLE,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
