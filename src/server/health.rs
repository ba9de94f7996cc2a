use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct HealthReport {
    status: &'static str,
}

pub(crate) async fn live() -> Json<HealthReport> {
    Json(HealthReport { status: "live" })
}
