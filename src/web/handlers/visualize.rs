// POST /visualize — chart data for a stored document.
//
// Body: { "filename": "...", "word": "...", "pattern": false }
// `word` is optional. With "pattern": true the word is used as a regular
// expression instead of a literal; an invalid expression yields a 500 with
// "Chart generation failed: ...".

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::analysis::MatchMode;
use crate::web::{service_error, AppState};

#[derive(Deserialize, Default)]
pub struct VisualizeRequest {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub pattern: bool,
}

pub async fn visualize_document(
    State(state): State<AppState>,
    Json(body): Json<VisualizeRequest>,
) -> Response {
    let mode = if body.pattern {
        MatchMode::Pattern
    } else {
        MatchMode::Literal
    };

    match state
        .service
        .visualize(&body.filename, body.word.as_deref(), mode)
        .await
    {
        Ok(viz) => Json(viz).into_response(),
        Err(e) => service_error(e),
    }
}
