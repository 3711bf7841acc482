// POST /upload — multipart upload of a single document.
//
// The file must be in a field named "file". On success the extracted text
// is cached and the response carries the key later requests refer to.
// Uploads over the configured body limit are rejected with 413.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Response;

use crate::web::{api_error, flagged_json, service_error, AppState};

/// Name of the multipart field carrying the document.
pub const FILE_FIELD: &str = "file";

/// Store an uploaded document and extract its text.
pub async fn upload_file(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut upload: Option<(String, Vec<u8>)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return api_error(e.status(), &e.body_text()),
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        match field.bytes().await {
            Ok(bytes) => {
                upload = Some((filename, bytes.to_vec()));
                break;
            }
            Err(e) => return api_error(e.status(), &e.body_text()),
        }
    }

    let Some((filename, bytes)) = upload else {
        return api_error(StatusCode::BAD_REQUEST, "No file part");
    };

    match state.service.ingest(&filename, bytes).await {
        Ok(report) => flagged_json(&report, "success", true),
        Err(e) => service_error(e),
    }
}
