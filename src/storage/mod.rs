//! Storage Module
//!
//! The in-memory state layer. Holds the process-wide `SubmissionLog`, the ordered
//! record of every submission accepted since startup.
//!
//! The log is append-only and lives in memory only: nothing is written to disk and
//! a restart starts from an empty log. All mutation is serialized behind a single
//! write lock, so log order always matches the order in which accepted requests
//! reach the store.

pub mod memory;
