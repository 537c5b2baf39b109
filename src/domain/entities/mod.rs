//! Domain Entities

mod commit_request;

pub use commit_request::{CommitRequest, TIMESTAMP_FORMAT};
