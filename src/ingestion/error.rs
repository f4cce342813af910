use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::types::ErrorResponse;

/// Reasons a submission is rejected.
///
/// Every rejection maps to HTTP 400 with a human-readable message; there are no
/// other client-facing error kinds. A rejected request never mutates the log.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Body missing, not parseable as JSON, or empty.
    #[error("{0}")]
    MalformedRequest(String),
    /// Body parses but has no `content` field.
    #[error("missing 'content' field in JSON body")]
    MissingField,
}

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
