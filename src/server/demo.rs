use axum::{extract::State, response::Html, Json};
use serde::{Deserialize, Serialize};

use super::{run_blocking, ApiError, AppState};
use crate::analyzer::{Analyzer, AnalyzerError};
use crate::demo;

const PAGE: &str = include_str!("page.html");

/// Body of every `POST /demo/*` call.
#[derive(Debug, Default, Deserialize)]
pub struct PanelRequest {
    /// Text box contents.
    #[serde(default)]
    pub text: String,
    /// Raw comma-separated category field (classification only).
    #[serde(default)]
    pub categories: Option<String>,
}

/// Rendered panel output.
#[derive(Debug, Serialize, Deserialize)]
pub struct PanelResponse {
    /// Markdown as produced by the panel.
    pub markdown: String,
    /// The same Markdown rendered to HTML.
    pub html: String,
}

pub(crate) async fn page() -> Html<&'static str> {
    Html(PAGE)
}

async fn panel<F>(state: &AppState, render: F) -> Result<Json<PanelResponse>, ApiError>
where
    F: FnOnce(&Analyzer) -> Result<String, AnalyzerError> + Send + 'static,
{
    let markdown = run_blocking(state, render).await?;
    Ok(Json(PanelResponse {
        html: demo::markdown_to_html(&markdown),
        markdown,
    }))
}

pub(crate) async fn sentiment(
    State(state): State<AppState>,
    Json(request): Json<PanelRequest>,
) -> Result<Json<PanelResponse>, ApiError> {
    panel(&state, move |a| demo::sentiment_panel(a, &request.text)).await
}

pub(crate) async fn entities(
    State(state): State<AppState>,
    Json(request): Json<PanelRequest>,
) -> Result<Json<PanelResponse>, ApiError> {
    panel(&state, move |a| demo::entities_panel(a, &request.text)).await
}

pub(crate) async fn classify(
    State(state): State<AppState>,
    Json(request): Json<PanelRequest>,
) -> Result<Json<PanelResponse>, ApiError> {
    let categories = request
        .categories
        .unwrap_or_else(demo::default_categories_field);
    panel(&state, move |a| {
        demo::classify_panel(a, &request.text, &categories)
    })
    .await
}

pub(crate) async fn summarize(
    State(state): State<AppState>,
    Json(request): Json<PanelRequest>,
) -> Result<Json<PanelResponse>, ApiError> {
    panel(&state, move |a| demo::summarize_panel(a, &request.text)).await
}
