//! Error types for pagepush
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for publish operations
pub type PublishResultOf<T> = Result<T, PublishError>;

/// Fatal failures of a publish run.
///
/// "Nothing to commit" and an operator cancel are not errors; they are
/// reported through `PublishStatus`.
#[derive(Error, Debug)]
pub enum PublishError {
    /// The version-control executable could not be located
    #[error("'{program}' was not found; make sure git is installed and on PATH")]
    ToolUnavailable { program: String },

    /// A staging operation failed under strict mode
    #[error("failed to stage {selector}{}", detail(*exit_code, stderr))]
    StageFailed {
        selector: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// A selection pattern could not be parsed
    #[error("invalid file pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// `status --porcelain` failed
    #[error("failed to read repository status{}", detail(None, stderr))]
    StatusFailed { stderr: String },

    /// The commit failed for a reason other than "nothing staged"
    #[error("failed to create the commit{}", detail(*exit_code, stderr))]
    CommitFailed {
        exit_code: Option<i32>,
        stderr: String,
    },

    /// The push was rejected or could not reach the remote
    #[error("failed to push to the remote repository{}", detail(*exit_code, stderr))]
    PushFailed {
        exit_code: Option<i32>,
        stderr: String,
    },

    /// Walking the working directory failed
    #[error("failed to scan {root}: {message}")]
    Walk { root: PathBuf, message: String },

    /// The confirmation prompt could not be shown
    #[error("confirmation prompt failed: {0}")]
    Prompt(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PublishError {
    /// Diagnostic text produced by the external tool, if any.
    pub fn tool_stderr(&self) -> Option<&str> {
        match self {
            Self::StageFailed { stderr, .. }
            | Self::StatusFailed { stderr }
            | Self::CommitFailed { stderr, .. }
            | Self::PushFailed { stderr, .. } => {
                let trimmed = stderr.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            _ => None,
        }
    }
}

fn detail(exit_code: Option<i32>, stderr: &str) -> String {
    let stderr = stderr.trim();
    match (exit_code, stderr.is_empty()) {
        (Some(code), false) => format!(" (exit code {code}):\n{stderr}"),
        (None, false) => format!(":\n{stderr}"),
        (Some(code), true) => format!(" (exit code {code})"),
        (None, true) => String::new(),
    }
}
