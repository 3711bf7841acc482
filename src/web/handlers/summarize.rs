// POST /summarize — extractive summary of a stored document.

use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use crate::web::{flagged_json, service_error, AppState};

#[derive(Deserialize, Default)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub filename: String,
}

pub async fn summarize_document(
    State(state): State<AppState>,
    Json(body): Json<SummarizeRequest>,
) -> Response {
    match state.service.summarize(&body.filename).await {
        Ok(report) => flagged_json(&report, "success", true),
        Err(e) => service_error(e),
    }
}
