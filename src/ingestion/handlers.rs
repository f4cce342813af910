use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use serde_json::Value;

use super::error::IngestError;
use super::types::SubmitResponse;
use crate::storage::memory::SubmissionLog;

/// `POST /qr` — validates the body and appends its `content` value to the log.
pub async fn handle_submit_qr(
    Extension(log): Extension<Arc<SubmissionLog>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SubmitResponse>, IngestError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::warn!("Rejected submission: {}", rejection.body_text());
        IngestError::MalformedRequest("request body is not JSON".to_string())
    })?;

    let content = extract_content(body)?;

    let shown = match &content {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };

    let total = log.append(content).await;
    tracing::info!("QR payload received: {} ({} in log)", shown, total);

    Ok(Json(SubmitResponse { status: "ok" }))
}

/// `GET /qr-codes` — the full log as a JSON array, arrival order.
pub async fn handle_list_qr_codes(
    Extension(log): Extension<Arc<SubmissionLog>>,
) -> Json<Vec<Value>> {
    Json(log.snapshot().await)
}

/// Applies the validation order: non-empty body first, then the `content` field.
/// (Parse failures are already mapped to `MalformedRequest` by the extractor.)
fn extract_content(body: Value) -> Result<Value, IngestError> {
    if is_empty_body(&body) {
        return Err(IngestError::MalformedRequest("empty JSON body".to_string()));
    }

    match body {
        Value::Object(mut fields) => fields.remove("content").ok_or(IngestError::MissingField),
        _ => Err(IngestError::MissingField),
    }
}

fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Object(fields) => fields.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}
