//! Event Sink Implementations
//!
//! - JsonEventSink: NDJSON output for scripts and CI
//!
//! The human-readable console sink lives with the terminal UI.

mod json;

pub use json::JsonEventSink;
