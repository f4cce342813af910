//! Ingestion Service Module
//!
//! Handles the intake of scanned QR payloads over HTTP and exposes the
//! accumulated log for retrieval.
//!
//! ## Workflow
//! 1. **Validate**: The request body must parse as JSON, be non-empty, and carry
//!    a `content` field.
//! 2. **Store**: The `content` value is appended, exactly as received, to the
//!    shared `SubmissionLog`.
//! 3. **Acknowledge**: The client gets `{"status":"ok"}`. Rejected requests get
//!    a 400 with a reason and leave the log untouched.

pub mod error;
pub mod handlers;
pub mod types;
