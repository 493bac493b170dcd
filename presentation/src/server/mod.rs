//! HTTP API for the portfolio site
//!
//! - `POST /api/chat`: chat assistant
//! - `GET /api/chat/questions`: greeting and suggested questions
//! - `POST /api/terminal`: visitor terminal
//! - `GET /api/experiences`, `GET /api/projects`: content records
//! - `GET /health`

pub mod error;
pub mod routes;

use axum::Router;
use chrono::{DateTime, Utc};
use folio_application::{RespondToVisitorUseCase, RunCommandUseCase};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Application state shared across handlers
pub struct AppState {
    pub responder: RespondToVisitorUseCase,
    pub terminal: RunCommandUseCase,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(responder: RespondToVisitorUseCase, terminal: RunCommandUseCase) -> Self {
        Self {
            responder,
            terminal,
            started_at: Utc::now(),
        }
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::chat_routes())
        .merge(routes::terminal_routes())
        .merge(routes::content_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until Ctrl-C
pub async fn serve(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down"),
        Err(e) => {
            warn!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
