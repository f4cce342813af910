//! QR Inbox Service Library
//!
//! Library crate behind the `qr-inbox` binary: an HTTPS receiver for scanned
//! QR-code payloads with a web page that lists everything received so far.
//!
//! ## Architecture Modules
//! The service is composed of three small subsystems:
//!
//! - **`ingestion`**: The HTTP intake surface. Validates submitted payloads and
//!   appends them to the shared log, and exposes the log as JSON.
//! - **`storage`**: The in-memory state layer. Holds the process-wide
//!   `SubmissionLog`, an ordered, append-only record of everything received.
//! - **`web`**: The human-facing view. Renders the current log as an HTML page.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};

use crate::storage::memory::SubmissionLog;

pub mod ingestion;
pub mod storage;
pub mod web;

/// Builds the HTTP router with the shared submission log injected into every
/// handler via an `Extension` layer.
pub fn app(log: Arc<SubmissionLog>) -> Router {
    Router::new()
        .route("/", get(web::handlers::handle_home))
        .route("/qr", post(ingestion::handlers::handle_submit_qr))
        .route("/qr-codes", get(ingestion::handlers::handle_list_qr_codes))
        .layer(Extension(log))
}
