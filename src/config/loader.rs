//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::Preset;

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{ColorMode, Config};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "pagepush.toml";

/// User config path below the platform config directory
pub const USER_CONFIG_PATH: &str = "pagepush/config.toml";

/// A config file exists but cannot be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults.
///
/// The first file found wins; files are not merged. Environment overrides
/// are applied last.
pub fn load_or_default(
    project_root: Option<&Path>,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let (config, warnings) = load_file_or_default(project_root, dirs::config_dir().as_deref())?;
    Ok((with_env_overrides(config), warnings))
}

/// Like `load_or_default` with an explicit user config directory and no
/// environment overrides.
pub fn load_file_or_default(
    project_root: Option<&Path>,
    user_config_dir: Option<&Path>,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.is_file() {
            return load_with_warnings(&project_config);
        }
    }

    if let Some(dir) = user_config_dir {
        let user_config = dir.join(USER_CONFIG_PATH);
        if user_config.is_file() {
            return load_with_warnings(&user_config);
        }
    }

    Ok((Config::default(), Vec::new()))
}

/// Apply environment variable overrides (PAGEPUSH_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

/// Apply overrides read through `get_env`; invalid values are reported to
/// `warnings` and ignored.
pub fn with_env_overrides_from<F, W>(mut config: Config, get_env: F, warnings: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    if let Some(value) = get_env("PAGEPUSH_PRESET") {
        let validator = EnvVarValidator::new("PAGEPUSH_PRESET", &["html", "web", "all", "assets"]);
        config.publish.preset =
            validator.parse_with_writer(&value, Preset::parse, config.publish.preset, warnings);
    }

    if let Some(value) = get_env("PAGEPUSH_STRICT") {
        let validator = EnvVarValidator::new("PAGEPUSH_STRICT", &["true", "false"]);
        config.publish.strict = validator.parse_with_writer(
            &value,
            |v| parse_bool(v).map(Some),
            config.publish.strict,
            warnings,
        );
    }

    if let Some(message) = non_empty(get_env("PAGEPUSH_MESSAGE")) {
        config.publish.message = Some(message);
    }

    if let Some(remote) = non_empty(get_env("PAGEPUSH_REMOTE")) {
        config.publish.remote = remote;
    }

    if let Some(git) = non_empty(get_env("PAGEPUSH_GIT")) {
        config.publish.git = git;
    }

    if let Some(suffix) = non_empty(get_env("PAGEPUSH_PAGES_SUFFIX")) {
        config.pages.suffix = suffix;
    }

    if let Some(value) = get_env("PAGEPUSH_NO_COLOR") {
        if parse_bool(&value).unwrap_or(!value.is_empty()) {
            config.output.color = ColorMode::Never;
        }
    }

    config
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "publish",
        "preset",
        "strict",
        "message",
        "remote",
        "git",
        "confirm",
        "pages",
        "suffix",
        "assets",
        "essential",
        "patterns",
        "folders",
        "walk",
        "exclude_dirs",
        "exclude_suffixes",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
