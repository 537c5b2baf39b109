//! Stage planner
//!
//! Resolves a `SelectionMode` into the ordered staging operations of a run.
//! The planner only reads the working directory; staging itself happens
//! through the `VersionControl` port.

use std::path::Path;

use glob::{MatchOptions, Pattern};
use ignore::WalkBuilder;

use crate::domain::value_objects::SelectionMode;
use crate::error::PublishError;

/// Patterns staged by the extended asset mode
pub const DEFAULT_ASSET_PATTERNS: &[&str] = &[
    "*.html",
    "*.css",
    "*.js",
    "*.png",
    "*.ico",
    "*.xml",
    "*.webmanifest",
    "*.json",
    "*.txt",
];

/// Folders staged wholesale by the extended asset mode when present
pub const DEFAULT_ASSET_FOLDERS: &[&str] =
    &["images", "img", "icons", "assets", "resources", "css", "js"];

/// Directory names never entered by the tree walk
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git", "__pycache__", "node_modules"];

/// File suffixes never staged by the tree walk
pub const DEFAULT_EXCLUDED_SUFFIXES: &[&str] = &[".pyc", ".log"];

/// Lists the planner works from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOptions {
    pub asset_patterns: Vec<String>,
    pub asset_folders: Vec<String>,
    pub excluded_dirs: Vec<String>,
    pub excluded_suffixes: Vec<String>,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            asset_patterns: to_strings(DEFAULT_ASSET_PATTERNS),
            asset_folders: to_strings(DEFAULT_ASSET_FOLDERS),
            excluded_dirs: to_strings(DEFAULT_EXCLUDED_DIRS),
            excluded_suffixes: to_strings(DEFAULT_EXCLUDED_SUFFIXES),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// One `add` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOp {
    /// Human-readable selector (pattern, folder or path)
    pub label: String,
    /// Pathspecs passed to the tool
    pub pathspecs: Vec<String>,
    /// Number of files the pattern matched, when known up front
    pub matched: Option<usize>,
}

impl StageOp {
    fn single(pathspec: impl Into<String>, matched: Option<usize>) -> Self {
        let pathspec = pathspec.into();
        Self {
            label: pathspec.clone(),
            pathspecs: vec![pathspec],
            matched,
        }
    }
}

/// Staging operations for a run, plus what was left out and why
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagePlan {
    pub ops: Vec<StageOp>,
    /// `(label, reason)` for selectors that matched nothing
    pub skipped: Vec<(String, String)>,
    /// `(pattern, message)` for selectors that could not be parsed
    pub invalid: Vec<(String, String)>,
}

impl StagePlan {
    /// Every pathspec of the plan, in order
    pub fn pathspecs(&self) -> Vec<String> {
        self.ops
            .iter()
            .flat_map(|op| op.pathspecs.iter().cloned())
            .collect()
    }
}

/// Resolve `mode` against the working directory at `root`.
pub fn plan_stage_ops(
    root: &Path,
    mode: &SelectionMode,
    options: &PlanOptions,
) -> Result<StagePlan, PublishError> {
    match mode {
        SelectionMode::ExactPatterns(patterns) => Ok(StagePlan {
            ops: patterns
                .iter()
                .map(|p| StageOp::single(p.as_str(), None))
                .collect(),
            ..StagePlan::default()
        }),
        SelectionMode::AllChanges => plan_tree_walk(root, options),
        SelectionMode::ExtendedAssets => Ok(plan_extended_assets(root, options)),
    }
}

fn plan_tree_walk(root: &Path, options: &PlanOptions) -> Result<StagePlan, PublishError> {
    let excluded_dirs = options.excluded_dirs.clone();
    let mut walker = WalkBuilder::new(root);
    // Dot directories such as `.well-known` are published; only dot files are skipped.
    walker
        .hidden(false)
        .parents(false)
        .ignore(false)
        .git_global(false)
        .git_ignore(true)
        .git_exclude(true)
        .require_git(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            let name = entry.file_name().to_string_lossy();
            !(is_dir && excluded_dirs.iter().any(|d| d.as_str() == name))
        });

    let mut files = Vec::new();
    for entry in walker.build() {
        let entry = entry.map_err(|e| PublishError::Walk {
            root: root.to_path_buf(),
            message: e.to_string(),
        })?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.')
            || options
                .excluded_suffixes
                .iter()
                .any(|suffix| name.ends_with(suffix.as_str()))
        {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        files.push(to_pathspec(relative));
    }

    Ok(StagePlan {
        ops: files
            .into_iter()
            .map(|path| StageOp::single(path, Some(1)))
            .collect(),
        ..StagePlan::default()
    })
}

fn plan_extended_assets(root: &Path, options: &PlanOptions) -> StagePlan {
    let mut plan = StagePlan::default();
    let match_options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };
    let escaped_root = Pattern::escape(&root.to_string_lossy());

    for pattern in &options.asset_patterns {
        if let Err(e) = Pattern::new(pattern) {
            plan.invalid.push((pattern.clone(), e.msg.to_string()));
            continue;
        }
        let full = format!("{}/{}", escaped_root.trim_end_matches('/'), pattern);
        let matched = match glob::glob_with(&full, match_options) {
            Ok(paths) => paths.filter_map(Result::ok).count(),
            Err(e) => {
                plan.invalid.push((pattern.clone(), e.msg.to_string()));
                continue;
            }
        };
        if matched == 0 {
            plan.skipped
                .push((pattern.clone(), "no matching files".to_string()));
        } else {
            plan.ops.push(StageOp::single(pattern.as_str(), Some(matched)));
        }
    }

    for folder in &options.asset_folders {
        let folder = folder.trim_end_matches('/');
        if folder.is_empty() || !root.join(folder).is_dir() {
            continue;
        }
        plan.ops.push(StageOp::single(format!("{}/*", folder), None));
    }

    plan
}

fn to_pathspec(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn exact_patterns_pass_through_unchanged() {
        let dir = tempdir().unwrap();
        let mode = SelectionMode::ExactPatterns(vec!["*.html".into(), "*.css".into()]);
        let plan = plan_stage_ops(dir.path(), &mode, &PlanOptions::default()).unwrap();
        assert_eq!(plan.pathspecs(), vec!["*.html", "*.css"]);
        assert!(plan.ops.iter().all(|op| op.matched.is_none()));
    }

    #[test]
    fn tree_walk_skips_control_cache_dot_and_denylisted_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "index.html");
        touch(root, "css/site.css");
        touch(root, ".git/config");
        touch(root, "__pycache__/mod.cpython-311.pyc");
        touch(root, "scripts/__pycache__/x.pyc");
        touch(root, ".env");
        touch(root, "upload.pyc");
        touch(root, "debug.log");
        touch(root, "scripts/deploy.py");

        let plan = plan_stage_ops(root, &SelectionMode::AllChanges, &PlanOptions::default())
            .unwrap();
        assert_eq!(
            plan.pathspecs(),
            vec!["css/site.css", "index.html", "scripts/deploy.py"]
        );
    }

    #[test]
    fn tree_walk_enters_dot_directories_but_skips_dot_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "index.html");
        touch(root, ".well-known/security.txt");
        touch(root, ".github/workflows/pages.yml");
        touch(root, ".env");
        touch(root, ".git/HEAD");

        let plan = plan_stage_ops(root, &SelectionMode::AllChanges, &PlanOptions::default())
            .unwrap();
        assert_eq!(
            plan.pathspecs(),
            vec![
                ".github/workflows/pages.yml",
                ".well-known/security.txt",
                "index.html",
            ]
        );
    }

    #[test]
    fn tree_walk_respects_gitignore() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join(".gitignore"), "drafts/\n").unwrap();
        touch(root, "drafts/wip.html");
        touch(root, "index.html");

        let plan = plan_stage_ops(root, &SelectionMode::AllChanges, &PlanOptions::default())
            .unwrap();
        assert_eq!(plan.pathspecs(), vec!["index.html"]);
    }

    #[test]
    fn tree_walk_of_empty_dir_plans_nothing() {
        let dir = tempdir().unwrap();
        let plan = plan_stage_ops(
            dir.path(),
            &SelectionMode::AllChanges,
            &PlanOptions::default(),
        )
        .unwrap();
        assert!(plan.ops.is_empty());
    }

    #[test]
    fn extended_assets_count_matches_and_skip_empty_patterns() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "index.html");
        touch(root, "about.html");
        touch(root, "favicon.ico");
        touch(root, "images/logo.png");
        touch(root, ".hidden.html");

        let plan = plan_stage_ops(root, &SelectionMode::ExtendedAssets, &PlanOptions::default())
            .unwrap();

        let html = plan.ops.iter().find(|op| op.label == "*.html").unwrap();
        assert_eq!(html.matched, Some(2));
        let ico = plan.ops.iter().find(|op| op.label == "*.ico").unwrap();
        assert_eq!(ico.matched, Some(1));
        assert!(plan.ops.iter().any(|op| op.label == "images/*"));
        assert!(!plan.ops.iter().any(|op| op.label == "*.css"));
        assert!(plan.skipped.iter().any(|(label, _)| label == "*.css"));
        assert!(plan.invalid.is_empty());
    }

    #[test]
    fn extended_assets_report_invalid_patterns() {
        let dir = tempdir().unwrap();
        let options = PlanOptions {
            asset_patterns: vec!["[*.html".to_string()],
            asset_folders: Vec::new(),
            ..PlanOptions::default()
        };
        let plan = plan_stage_ops(dir.path(), &SelectionMode::ExtendedAssets, &options).unwrap();
        assert!(plan.ops.is_empty());
        assert_eq!(plan.invalid.len(), 1);
        assert_eq!(plan.invalid[0].0, "[*.html");
    }
}
