//! Essential asset check
//!
//! Before a full site upload, look for the files a pages site with icons and
//! a web manifest is expected to carry.

use std::path::Path;

/// Files checked by default, in report order
pub const DEFAULT_ESSENTIAL_ASSETS: &[&str] = &[
    "index.html",
    "site.webmanifest",
    "favicon.ico",
    "favicon-16x16.png",
    "favicon-32x32.png",
    "apple-touch-icon.png",
    "android-chrome-192x192.png",
    "android-chrome-512x512.png",
];

/// Outcome of looking up each essential file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetCheck {
    /// `(name, present)` in the order checked
    pub entries: Vec<(String, bool)>,
}

impl AssetCheck {
    pub fn missing(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, present)| !present)
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn all_present(&self) -> bool {
        self.entries.iter().all(|(_, present)| *present)
    }
}

/// Look up each name relative to `root`.
pub fn check_essential_assets(root: &Path, names: &[String]) -> AssetCheck {
    let entries = names
        .iter()
        .map(|name| (name.clone(), root.join(name).exists()))
        .collect();
    AssetCheck { entries }
}
