// Web server — Axum-based JSON API over the document service.
//
// POST /upload takes a multipart file, the other POST routes take a JSON
// body naming the document (by the filename returned from /upload). Every
// error is a JSON object with a single "error" field.

use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::Config;
use crate::service::{DocumentService, ServiceError};

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: DocumentService,
    pub config: Arc<Config>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config, service: DocumentService) -> Result<()> {
    let addr = format!("{}:{}", config.bind, config.port);
    let state = AppState {
        service,
        config: Arc::new(config),
    };

    let app = build_router(state);

    info!("docscope listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health))
        .route("/documents", get(handlers::documents::list_documents))
        .route("/upload", post(handlers::upload::upload_file))
        .route("/search", post(handlers::search::search_word))
        .route("/visualize", post(handlers::visualize::visualize_document))
        .route("/summarize", post(handlers::summarize::summarize_document))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check. Always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

async fn not_found() -> Response {
    api_error(StatusCode::NOT_FOUND, "Not found")
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}

/// Map a service failure onto an HTTP status and JSON error body.
pub fn service_error(err: ServiceError) -> Response {
    let status = match &err {
        ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        ServiceError::DocumentMissing => StatusCode::NOT_FOUND,
        ServiceError::Extraction(_) | ServiceError::Visualization(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        ServiceError::Internal(e) => {
            error!(error = %e, "Unexpected service failure");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    };
    api_error(status, &err.to_string())
}

/// Serialize `value` as a JSON object with an extra boolean field
/// (e.g. `"success": true`). A value that fails to serialize is a 500.
pub(crate) fn flagged_json<T: Serialize>(value: &T, key: &str, flag: bool) -> Response {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::Object(mut map)) => {
            map.insert(key.to_string(), serde_json::Value::Bool(flag));
            axum::Json(serde_json::Value::Object(map)).into_response()
        }
        Ok(other) => axum::Json(other).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to serialize response");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            Err(serde::ser::Error::custom("not representable"))
        }
    }

    #[derive(Serialize)]
    struct Report {
        filename: String,
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_flagged_json_adds_field() {
        let report = Report {
            filename: "a.txt".to_string(),
        };
        let response = flagged_json(&report, "success", true);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "filename": "a.txt", "success": true })
        );
    }

    #[tokio::test]
    async fn test_flagged_json_serialization_failure_is_500() {
        let response = flagged_json(&Unserializable, "success", true);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Internal server error" })
        );
    }
}
