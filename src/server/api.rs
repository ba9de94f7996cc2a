use axum::{extract::State, Json};
use serde::Deserialize;

use super::{run_blocking, ApiError, AppState};
use crate::analyzer::CompositeResult;

/// Body of `POST /analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Text to analyze.
    pub text: String,
    /// Candidate categories; the configured defaults when absent.
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

pub(crate) async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<CompositeResult>, ApiError> {
    let AnalyzeRequest { text, categories } = request;
    let categories =
        categories.unwrap_or_else(|| state.analyzer().options().default_categories.clone());

    let result = run_blocking(&state, move |analyzer| {
        analyzer.analyze_all(&text, &categories)
    })
    .await?;

    Ok(Json(result))
}
