//! Version Control Port
//!
//! The runner talks to git only through this trait, so every subprocess
//! failure arrives as a value and the caller decides whether it is fatal.

use thiserror::Error;

/// Captured output of a successful tool invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn new(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Trimmed stdout, `None` when the tool printed nothing
    pub fn stdout_text(&self) -> Option<&str> {
        let trimmed = self.stdout.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Stdout, falling back to stderr (git reports push progress there)
    pub fn report_text(&self) -> Option<&str> {
        self.stdout_text().or_else(|| {
            let trimmed = self.stderr.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        })
    }
}

/// Failure of a tool invocation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VcsError {
    /// The executable could not be started
    #[error("'{program}' not found")]
    NotFound { program: String },

    /// The tool ran and exited non-zero
    #[error("command exited with {exit_code:?}: {stderr}")]
    Failed {
        exit_code: Option<i32>,
        stderr: String,
    },

    /// Spawning or reading the process failed for another reason
    #[error("I/O error: {0}")]
    Io(String),
}

impl VcsError {
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Failed { exit_code, .. } => *exit_code,
            _ => None,
        }
    }

    /// Diagnostic text to surface to the operator
    pub fn stderr(&self) -> String {
        match self {
            Self::Failed { stderr, .. } => stderr.clone(),
            other => other.to_string(),
        }
    }
}

pub type VcsResult<T> = Result<T, VcsError>;

/// Operations the publish pipeline needs from a version-control tool
pub trait VersionControl {
    /// Name or path of the executable (for messages)
    fn program(&self) -> &str;

    /// Fails with `VcsError::NotFound` when the tool cannot be located
    fn ensure_available(&self) -> VcsResult<()>;

    /// `add -- <pathspecs...>`
    fn add(&self, pathspecs: &[String]) -> VcsResult<CommandOutput>;

    /// `status --porcelain`
    fn status_porcelain(&self) -> VcsResult<String>;

    /// `commit -m <message>`
    fn commit(&self, message: &str) -> VcsResult<CommandOutput>;

    /// `push`
    fn push(&self) -> VcsResult<CommandOutput>;

    /// `config --get remote.<remote>.url`
    fn remote_url(&self, remote: &str) -> VcsResult<String>;
}

impl<T: VersionControl + ?Sized> VersionControl for &T {
    fn program(&self) -> &str {
        (**self).program()
    }

    fn ensure_available(&self) -> VcsResult<()> {
        (**self).ensure_available()
    }

    fn add(&self, pathspecs: &[String]) -> VcsResult<CommandOutput> {
        (**self).add(pathspecs)
    }

    fn status_porcelain(&self) -> VcsResult<String> {
        (**self).status_porcelain()
    }

    fn commit(&self, message: &str) -> VcsResult<CommandOutput> {
        (**self).commit(message)
    }

    fn push(&self) -> VcsResult<CommandOutput> {
        (**self).push()
    }

    fn remote_url(&self, remote: &str) -> VcsResult<String> {
        (**self).remote_url(remote)
    }
}
