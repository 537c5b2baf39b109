//! Selection value objects - which files a run stages and how staging errors are treated

use serde::{Deserialize, Serialize};

/// Named publishing presets, one per classic upload script
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Only `*.html`
    Html,
    /// `*.html` and `*.css`
    Web,
    /// Every file in the tree except control/cache directories and dotfiles
    #[default]
    All,
    /// Markup, styles, scripts, icons, manifests and asset folders
    Assets,
}

impl Preset {
    /// Selection mode this preset resolves to
    pub fn selection(&self) -> SelectionMode {
        match self {
            Preset::Html => SelectionMode::ExactPatterns(vec!["*.html".to_string()]),
            Preset::Web => {
                SelectionMode::ExactPatterns(vec!["*.html".to_string(), "*.css".to_string()])
            }
            Preset::All => SelectionMode::AllChanges,
            Preset::Assets => SelectionMode::ExtendedAssets,
        }
    }

    /// Default commit message prefix
    pub fn message_prefix(&self) -> &'static str {
        match self {
            Preset::Html => "Update HTML files",
            Preset::Web => "Update HTML and CSS files",
            Preset::All => "Automatic update",
            Preset::Assets => "Full site update",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Html => "html",
            Preset::Web => "web",
            Preset::All => "all",
            Preset::Assets => "assets",
        }
    }

    /// Parse a preset name as written in config or environment.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "html" => Some(Preset::Html),
            "web" | "html-css" => Some(Preset::Web),
            "all" | "everything" => Some(Preset::All),
            "assets" | "extended" => Some(Preset::Assets),
            _ => None,
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How the files to stage are chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    /// Pathspecs handed to the version-control tool unchanged
    ExactPatterns(Vec<String>),
    /// Walk the working tree, excluding the control directory, caches,
    /// dotfiles and denylisted suffixes
    AllChanges,
    /// The broad asset pattern list plus well-known asset folders,
    /// preceded by the essential asset check
    ExtendedAssets,
}

impl SelectionMode {
    /// Strictness used when neither the CLI nor config overrides it
    pub fn default_strictness(&self) -> Strictness {
        match self {
            SelectionMode::ExactPatterns(_) | SelectionMode::AllChanges => Strictness::Strict,
            SelectionMode::ExtendedAssets => Strictness::Lenient,
        }
    }

    pub fn checks_essential_assets(&self) -> bool {
        matches!(self, SelectionMode::ExtendedAssets)
    }

    pub fn describe(&self) -> String {
        match self {
            SelectionMode::ExactPatterns(patterns) => patterns.join(" "),
            SelectionMode::AllChanges => "all files (tree walk)".to_string(),
            SelectionMode::ExtendedAssets => "web assets".to_string(),
        }
    }
}

/// Whether a failed staging operation aborts the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// First staging failure is fatal
    #[default]
    Strict,
    /// Staging failures are reported and skipped, with no retry
    Lenient,
}

impl Strictness {
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            Strictness::Strict
        } else {
            Strictness::Lenient
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, Strictness::Strict)
    }
}

impl std::fmt::Display for Strictness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strictness::Strict => write!(f, "strict"),
            Strictness::Lenient => write!(f, "lenient"),
        }
    }
}
