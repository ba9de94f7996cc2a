//! HTTP surface: the JSON analysis endpoint, a liveness probe and the demo page.

mod api;
mod demo;
mod health;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::analyzer::{Analyzer, AnalyzerError};

pub use api::AnalyzeRequest;
pub use demo::{PanelRequest, PanelResponse};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<Analyzer>,
}

impl AppState {
    /// Wrap a loaded analyzer.
    pub fn new(analyzer: Arc<Analyzer>) -> Self {
        Self { analyzer }
    }

    pub(crate) fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }
}

/// All routes, with request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(demo::page))
        .route("/demo/sentiment", post(demo::sentiment))
        .route("/demo/entities", post(demo::entities))
        .route("/demo/classify", post(demo::classify))
        .route("/demo/summarize", post(demo::summarize))
        .route("/analyze", post(api::analyze))
        .route("/health/live", get(health::live))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(analyzer: Arc<Analyzer>, addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");

    axum::serve(listener, router(AppState::new(analyzer)))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

/// Handler failure mapped onto an HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation or inference failure.
    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),

    /// The blocking inference task panicked or was cancelled.
    #[error("inference task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Analyzer(AnalyzerError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Run inference on the blocking pool so the runtime keeps serving.
pub(crate) async fn run_blocking<T, F>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&Analyzer) -> Result<T, AnalyzerError> + Send + 'static,
    T: Send + 'static,
{
    let analyzer = Arc::clone(&state.analyzer);
    let value = tokio::task::spawn_blocking(move || f(&analyzer)).await??;
    Ok(value)
}
