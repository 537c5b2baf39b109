//! Publish Options
//!
//! Configuration types for publish runs.

use std::path::PathBuf;

use crate::domain::services::{PlanOptions, DEFAULT_ESSENTIAL_ASSETS};
use crate::domain::value_objects::{Preset, SelectionMode, Strictness, DEFAULT_PAGES_SUFFIX};

/// Options for the publish use case
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Working directory of the repository
    pub root: PathBuf,
    /// Which files to stage
    pub selection: SelectionMode,
    /// Whether a failed staging operation aborts the run
    pub strictness: Strictness,
    /// Commit message prefix (timestamp is appended)
    pub message_prefix: String,
    /// Remote whose URL feeds the pages guess
    pub remote: String,
    /// Repository-name suffix identifying a pages site
    pub pages_suffix: String,
    /// Files looked up before an extended asset upload
    pub essential_assets: Vec<String>,
    /// Pattern, folder and denylist inputs of the stage planner
    pub plan: PlanOptions,
}

impl PublishOptions {
    pub fn new(root: impl Into<PathBuf>, preset: Preset) -> Self {
        let selection = preset.selection();
        Self {
            root: root.into(),
            strictness: selection.default_strictness(),
            selection,
            message_prefix: preset.message_prefix().to_string(),
            remote: "origin".to_string(),
            pages_suffix: DEFAULT_PAGES_SUFFIX.to_string(),
            essential_assets: DEFAULT_ESSENTIAL_ASSETS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            plan: PlanOptions::default(),
        }
    }

    /// Replace the selection with explicit pathspecs.
    ///
    /// Keeps the current strictness; callers override it separately.
    pub fn with_patterns(mut self, patterns: Vec<String>) -> Self {
        self.selection = SelectionMode::ExactPatterns(patterns);
        self
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn with_message_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.message_prefix = prefix.into();
        self
    }

    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    pub fn with_pages_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.pages_suffix = suffix.into();
        self
    }

    pub fn with_essential_assets(mut self, assets: Vec<String>) -> Self {
        self.essential_assets = assets;
        self
    }

    pub fn with_plan(mut self, plan: PlanOptions) -> Self {
        self.plan = plan;
        self
    }
}
