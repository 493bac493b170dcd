//! API routes

use super::AppState;
use super::error::{ApiError, COMMAND_REQUIRED, MESSAGE_REQUIRED};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use chrono::Utc;
use folio_application::ReplySource;
use folio_domain::{CHAT_GREETING, Experience, Project, canned_answers, experiences, projects};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

type AppStateArc = Arc<AppState>;

// ============================================================================
// Chat Routes
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub greeting: String,
    pub questions: Vec<String>,
}

pub fn chat_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/chat/questions", get(questions))
}

/// The body is taken as raw JSON so that a missing or non-string `message`
/// and an unparsable body all map to the same 400.
async fn chat(
    State(state): State<AppStateArc>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let message = match payload {
        Ok(Json(body)) => body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        Err(rejection) => {
            debug!("Rejected chat body: {}", rejection);
            None
        }
    }
    .ok_or(ApiError::bad_request(MESSAGE_REQUIRED))?;

    let reply = state.responder.execute(&message).await?;

    match &reply.source {
        ReplySource::Canned => info!("Chat answered from canned table"),
        ReplySource::Model(model) => info!(
            "Chat answered by {} after {} attempt(s)",
            model,
            reply.attempts.len()
        ),
    }

    Ok(Json(ChatResponse {
        response: reply.text,
    }))
}

async fn questions() -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        greeting: CHAT_GREETING.to_string(),
        questions: canned_answers()
            .iter()
            .map(|c| c.question.to_string())
            .collect(),
    })
}

// ============================================================================
// Terminal Routes
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct TerminalRequest {
    pub command: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TerminalResponse {
    pub output: String,
    /// Caller should drop its displayed history
    pub clear: bool,
}

pub fn terminal_routes() -> Router<AppStateArc> {
    Router::new().route("/api/terminal", post(terminal))
}

async fn terminal(
    State(state): State<AppStateArc>,
    payload: Result<Json<TerminalRequest>, JsonRejection>,
) -> Result<Json<TerminalResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected terminal body: {}", rejection);
        ApiError::bad_request(COMMAND_REQUIRED)
    })?;

    let outcome = state.terminal.execute(&request.command).await;

    Ok(Json(TerminalResponse {
        output: outcome.text().to_string(),
        clear: outcome.is_clear(),
    }))
}

// ============================================================================
// Content Routes
// ============================================================================

pub fn content_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/experiences", get(list_experiences))
        .route("/api/projects", get(list_projects))
}

async fn list_experiences() -> Json<&'static [Experience]> {
    Json(experiences())
}

async fn list_projects() -> Json<&'static [Project]> {
    Json(projects())
}

// ============================================================================
// Health Routes
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: i64,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health))
}

async fn health(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: (Utc::now() - state.started_at).num_seconds(),
    })
}

#[cfg(test)]
mod tests {
    use super::super::{AppState, router};
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use folio_application::{
        CompletionGateway, CompletionRequest, GatewayError, RespondToVisitorUseCase,
        RouterSettings, RunCommandUseCase,
    };
    use folio_domain::Model;
    use std::sync::Mutex;
    use tower::ServiceExt;

    // -- Mock gateway ----------------------------------------------------------

    /// Answers with `answer` for models listed in `working`, fails otherwise
    struct StubGateway {
        credential: bool,
        working: Vec<&'static str>,
        calls: Mutex<usize>,
    }

    #[async_trait]
    impl CompletionGateway for StubGateway {
        fn has_credential(&self) -> bool {
            self.credential
        }

        async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
            *self.calls.lock().unwrap() += 1;
            if self.working.contains(&request.model.as_str()) {
                Ok(format!("answer from {}", request.model))
            } else {
                Err(GatewayError::Status {
                    status: 503,
                    body: "overloaded".to_string(),
                })
            }
        }
    }

    fn app_with(gateway: Arc<StubGateway>) -> Router {
        let settings = RouterSettings::default()
            .with_models(vec![Model::from("A"), Model::from("B")]);
        let state = AppState::new(
            RespondToVisitorUseCase::new(gateway, settings),
            RunCommandUseCase::new(),
        );
        router(Arc::new(state))
    }

    fn gateway(credential: bool, working: Vec<&'static str>) -> Arc<StubGateway> {
        Arc::new(StubGateway {
            credential,
            working,
            calls: Mutex::new(0),
        })
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    // -- /api/chat ---------------------------------------------------------------

    #[tokio::test]
    async fn test_chat_canned_question() {
        let gw = gateway(false, vec![]);
        let (status, body) = send(
            app_with(gw.clone()),
            post_json("/api/chat", r#"{"message":"how can i contact you?"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(
            body["response"]
                .as_str()
                .unwrap()
                .starts_with("You can reach Danu through")
        );
        assert_eq!(*gw.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_chat_falls_back_to_second_model() {
        let gw = gateway(true, vec!["B"]);
        let (status, body) = send(
            app_with(gw.clone()),
            post_json("/api/chat", r#"{"message":"Tell me a joke"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"], "answer from B");
        assert_eq!(*gw.calls.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_chat_all_models_failed() {
        let (status, body) = send(
            app_with(gateway(true, vec![])),
            post_json("/api/chat", r#"{"message":"Tell me a joke"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(
            body["error"],
            "All AI models are currently unavailable. Please try again later."
        );
    }

    #[tokio::test]
    async fn test_chat_without_credential() {
        let gw = gateway(false, vec!["A"]);
        let (status, body) = send(
            app_with(gw.clone()),
            post_json("/api/chat", r#"{"message":"Tell me a joke"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "API configuration error");
        assert_eq!(*gw.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_chat_rejects_bad_input() {
        for body in [
            r#"{}"#,
            r#"{"message":""}"#,
            r#"{"message":"   "}"#,
            r#"{"message":42}"#,
            r#"not json"#,
        ] {
            let (status, json) = send(
                app_with(gateway(true, vec!["A"])),
                post_json("/api/chat", body),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(json["error"], "Message is required");
        }
    }

    #[tokio::test]
    async fn test_questions_lists_canned_table() {
        let (status, body) = send(app_with(gateway(false, vec![])), get("/api/chat/questions")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["greeting"], "Hello! How can I assist you today?");
        assert_eq!(body["questions"].as_array().unwrap().len(), canned_answers().len());
        assert_eq!(body["questions"][0], "Who is Danu?");
    }

    // -- /api/terminal -------------------------------------------------------------

    #[tokio::test]
    async fn test_terminal_runs_command() {
        let (status, body) = send(
            app_with(gateway(false, vec![])),
            post_json("/api/terminal", r#"{"command":"help"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["output"].as_str().unwrap().starts_with("Available commands:"));
        assert_eq!(body["clear"], false);
    }

    #[tokio::test]
    async fn test_terminal_clear_flag() {
        let (_, body) = send(
            app_with(gateway(false, vec![])),
            post_json("/api/terminal", r#"{"command":"clear"}"#),
        )
        .await;

        assert_eq!(body["output"], "");
        assert_eq!(body["clear"], true);
    }

    #[tokio::test]
    async fn test_terminal_unknown_command_is_ok() {
        let (status, body) = send(
            app_with(gateway(false, vec![])),
            post_json("/api/terminal", r#"{"command":"rm -rf /"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["output"],
            "Command not found. Type 'help' to see available commands."
        );
    }

    #[tokio::test]
    async fn test_terminal_malformed_body() {
        let (status, body) = send(
            app_with(gateway(false, vec![])),
            post_json("/api/terminal", r#"{"cmd":"help"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Command is required");
    }

    // -- content and health ----------------------------------------------------------

    #[tokio::test]
    async fn test_content_lists() {
        let (status, body) = send(app_with(gateway(false, vec![])), get("/api/experiences")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), experiences().len());

        let (status, body) = send(app_with(gateway(false, vec![])), get("/api/projects")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), projects().len());
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app_with(gateway(false, vec![])), get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
