// GET /documents — every document with cached text.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::web::{service_error, AppState};

pub async fn list_documents(State(state): State<AppState>) -> Response {
    match state.service.documents().await {
        Ok(documents) => Json(serde_json::json!({
            "total": documents.len(),
            "documents": documents,
        }))
        .into_response(),
        Err(e) => service_error(e),
    }
}
