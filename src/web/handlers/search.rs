// POST /search — keyword in context.
//
// Body: { "filename": "...", "word": "..." }
// A word that never occurs is not an error: the response has found=false
// and a human-readable message.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::analysis::SearchOutcome;
use crate::web::{flagged_json, service_error, AppState};

#[derive(Deserialize, Default)]
pub struct SearchRequest {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub word: String,
}

/// Find a word and the sentences that explain it.
pub async fn search_word(
    State(state): State<AppState>,
    Json(body): Json<SearchRequest>,
) -> Response {
    match state.service.search(&body.filename, &body.word).await {
        Ok(SearchOutcome::Found(result)) => flagged_json(&result, "found", true),
        Ok(SearchOutcome::NotFound { word }) => Json(serde_json::json!({
            "found": false,
            "message": format!("The word \"{word}\" was not found in the document."),
            "word": word,
        }))
        .into_response(),
        Err(e) => service_error(e),
    }
}
