//! HTTP API for FS generation
//!
//! Routes:
//! - `POST /api/generate` generate a document
//! - `POST /api/export`   download a document as Markdown or HTML
//! - `GET  /api/catalog`  providers, models, modules and complexity levels
//! - `GET  /api/health`   liveness

pub mod handlers;

use crate::error::{FsForgeError, Result};
use crate::llm::FsGenerator;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared, read-only state handed to every handler
#[derive(Clone, Default)]
pub struct AppState {
    pub generator: FsGenerator,
}

/// Error body: `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for FsForgeError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody {
            error: self.user_message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate", post(handlers::generate))
        .route("/api/export", post(handlers::export))
        .route("/api/catalog", get(handlers::catalog))
        .route("/api/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Starting FS generator HTTP server");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
