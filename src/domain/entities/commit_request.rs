//! Commit request entity - the message and selectors of one run

use chrono::{DateTime, Local, TimeZone};

/// `strftime` layout of the timestamp embedded in every commit message
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What a single publish run commits.
///
/// Created per invocation and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    /// `<prefix> - <YYYY-MM-DD HH:MM:SS>`
    pub message: String,
    /// Ordered pathspecs that were handed to the stage step
    pub selectors: Vec<String>,
}

impl CommitRequest {
    /// Build a request stamped with the current local time.
    pub fn now(prefix: &str) -> Self {
        Self::at(prefix, &Local::now())
    }

    /// Build a request stamped with the given time.
    pub fn at<Tz: TimeZone>(prefix: &str, at: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let timestamp = at.format(TIMESTAMP_FORMAT);
        let prefix = prefix.trim();
        let message = if prefix.is_empty() {
            timestamp.to_string()
        } else {
            format!("{} - {}", prefix, timestamp)
        };
        Self {
            message,
            selectors: Vec::new(),
        }
    }

    pub fn with_selectors(mut self, selectors: Vec<String>) -> Self {
        self.selectors = selectors;
        self
    }
}
