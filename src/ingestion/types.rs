//! Ingestion Data Types
//!
//! Response bodies for the intake endpoints. The submit endpoint takes a free-form
//! JSON body (any value with a `content` field), so there is no request DTO; the
//! handler validates the raw `serde_json::Value` instead.

use serde::Serialize;

/// Acknowledgement returned once a submission has been stored.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: &'static str,
}

/// Body of every rejection response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
