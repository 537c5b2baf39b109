//! Publish Result
//!
//! Result types for publish runs.

/// How a run that did not fail ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStatus {
    /// Committed and pushed
    Published,
    /// Nothing was staged, so no commit was attempted
    NothingToCommit,
    /// Operator declined to continue after the asset check
    Cancelled,
}

impl PublishStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublishStatus::Published => "published",
            PublishStatus::NothingToCommit => "nothing-to-commit",
            PublishStatus::Cancelled => "cancelled",
        }
    }
}

/// Result of a publish run that did not hit a fatal error
#[derive(Debug, Clone)]
pub struct PublishResult {
    pub status: PublishStatus,
    /// `https://<owner>.github.io` style guess, if the remote name allows one
    pub guessed_url: Option<String>,
    /// Raw remote URL, when it could be read
    pub remote_url: Option<String>,
    /// Well-known files that were absent
    pub missing_assets: Vec<String>,
    /// Selectors that were staged
    pub staged: Vec<String>,
    /// Selectors skipped because they matched nothing
    pub skipped: Vec<String>,
    /// Lenient-mode staging failures
    pub warnings: Vec<String>,
    /// Number of files counted by selectors with a known match count
    pub files_matched: usize,
    /// Message of the commit, when one was created
    pub commit_message: Option<String>,
}

impl PublishResult {
    pub fn new(status: PublishStatus) -> Self {
        Self {
            status,
            guessed_url: None,
            remote_url: None,
            missing_assets: Vec::new(),
            staged: Vec::new(),
            skipped: Vec::new(),
            warnings: Vec::new(),
            files_matched: 0,
            commit_message: None,
        }
    }

    /// True when no staging operation failed, even leniently
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn is_published(&self) -> bool {
        self.status == PublishStatus::Published
    }
}

impl Default for PublishResult {
    fn default() -> Self {
        Self::new(PublishStatus::NothingToCommit)
    }
}
