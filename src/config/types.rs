//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::PublishOptions;
use crate::domain::services::{
    PlanOptions, DEFAULT_ASSET_FOLDERS, DEFAULT_ASSET_PATTERNS, DEFAULT_ESSENTIAL_ASSETS,
    DEFAULT_EXCLUDED_DIRS, DEFAULT_EXCLUDED_SUFFIXES,
};
use crate::domain::value_objects::{Preset, Strictness, DEFAULT_PAGES_SUFFIX};

use super::loader::{self, ConfigError, ConfigWarning};

/// `[publish]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Preset used when none is given on the command line
    #[serde(default)]
    pub preset: Preset,

    /// Overrides the preset's strictness when set
    #[serde(default)]
    pub strict: Option<bool>,

    /// Overrides the preset's commit message prefix when set
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default = "default_remote")]
    pub remote: String,

    /// Executable used for version control
    #[serde(default = "default_git")]
    pub git: String,

    /// Ask before continuing when essential assets are missing
    #[serde(default = "default_true")]
    pub confirm: bool,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            preset: Preset::default(),
            strict: None,
            message: None,
            remote: default_remote(),
            git: default_git(),
            confirm: true,
        }
    }
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_git() -> String {
    "git".to_string()
}

fn default_true() -> bool {
    true
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// `[pages]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesConfig {
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
        }
    }
}

fn default_suffix() -> String {
    DEFAULT_PAGES_SUFFIX.to_string()
}

/// `[assets]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    #[serde(default = "default_essential")]
    pub essential: Vec<String>,

    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,

    #[serde(default = "default_folders")]
    pub folders: Vec<String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            essential: default_essential(),
            patterns: default_patterns(),
            folders: default_folders(),
        }
    }
}

fn default_essential() -> Vec<String> {
    strings(DEFAULT_ESSENTIAL_ASSETS)
}

fn default_patterns() -> Vec<String> {
    strings(DEFAULT_ASSET_PATTERNS)
}

fn default_folders() -> Vec<String> {
    strings(DEFAULT_ASSET_FOLDERS)
}

/// `[walk]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkConfig {
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    #[serde(default = "default_exclude_suffixes")]
    pub exclude_suffixes: Vec<String>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: default_exclude_dirs(),
            exclude_suffixes: default_exclude_suffixes(),
        }
    }
}

fn default_exclude_dirs() -> Vec<String> {
    strings(DEFAULT_EXCLUDED_DIRS)
}

fn default_exclude_suffixes() -> Vec<String> {
    strings(DEFAULT_EXCLUDED_SUFFIXES)
}

/// `[output]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub publish: PublishConfig,

    #[serde(default)]
    pub pages: PagesConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub walk: WalkConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply the
    /// `PAGEPUSH_*` environment
    pub fn load_or_default(
        project_root: Option<&Path>,
    ) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (PAGEPUSH_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// `[publish] strict` when set, otherwise the preset's default
    pub fn strictness_for(&self, preset: Preset) -> Strictness {
        match self.publish.strict {
            Some(strict) => Strictness::from_strict_flag(strict),
            None => preset.selection().default_strictness(),
        }
    }

    /// Stage planner inputs
    pub fn plan_options(&self) -> PlanOptions {
        PlanOptions {
            asset_patterns: self.assets.patterns.clone(),
            asset_folders: self.assets.folders.clone(),
            excluded_dirs: self.walk.exclude_dirs.clone(),
            excluded_suffixes: self.walk.exclude_suffixes.clone(),
        }
    }

    /// Publish options for `preset` in `root` with every configured value
    /// applied. CLI flags are layered on top by the caller.
    pub fn publish_options(&self, root: impl Into<PathBuf>, preset: Preset) -> PublishOptions {
        let mut options = PublishOptions::new(root, preset)
            .with_strictness(self.strictness_for(preset))
            .with_remote(self.publish.remote.clone())
            .with_pages_suffix(self.pages.suffix.clone())
            .with_essential_assets(self.assets.essential.clone())
            .with_plan(self.plan_options());
        if let Some(message) = &self.publish.message {
            options = options.with_message_prefix(message.clone());
        }
        options
    }
}
