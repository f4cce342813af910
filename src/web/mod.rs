//! Web View Module
//!
//! Serves the human-facing page: a server-rendered HTML listing of every
//! submission received since startup, in arrival order, or a placeholder message
//! while the log is empty.
//!
//! The page is derived entirely from a `SubmissionLog` snapshot and holds no
//! state of its own. Submission values are HTML-escaped before rendering.

pub mod handlers;

#[cfg(test)]
mod tests;
