//! Publish Event Port
//!
//! Provides an observable interface for publish runs.
//! Enables console progress, NDJSON event streams, and debugging.

use std::path::PathBuf;

/// Event emitted during a publish run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishEvent {
    /// Run started
    Started {
        root: PathBuf,
        selection: String,
        strictness: String,
    },

    /// One well-known file was looked up
    AssetChecked { name: String, present: bool },

    /// Some well-known files are absent (summary)
    AssetsMissing { missing: Vec<String> },

    /// Operator declined to continue
    Cancelled,

    /// Staging is about to run
    StagingStarted { operations: usize },

    /// A staging operation succeeded
    Staged {
        label: String,
        pathspecs: Vec<String>,
        matched: Option<usize>,
    },

    /// A staging operation was skipped (no matching files)
    StageSkipped { label: String, reason: String },

    /// A staging operation failed under lenient mode
    StageWarning { label: String, error: String },

    /// No staging operation added anything
    NothingStaged,

    /// Pending-change check found nothing to record
    NothingToCommit,

    /// Commit is about to be created
    Committing { message: String },

    /// Commit created
    Committed { output: Option<String> },

    /// Push is about to start
    Pushing,

    /// Push finished
    Pushed { output: Option<String> },

    /// Run finished after a push
    Completed {
        guessed_url: Option<String>,
        remote_url: Option<String>,
    },
}

/// Trait for receiving publish events
///
/// Implementations:
/// - ConsoleEventSink: progress lines in the terminal
/// - JsonEventSink: NDJSON event stream for scripts
/// - NoopEventSink: silent operation
pub trait PublishEventSink {
    /// Handle a publish event
    fn on_event(&self, event: PublishEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PublishEventSink for NoopEventSink {
    fn on_event(&self, _event: PublishEvent) {}
}
