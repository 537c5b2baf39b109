//! Configuration module for pagepush
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PAGEPUSH_*)
//! 3. Project config (pagepush.toml in the working directory)
//! 4. User config (<config dir>/pagepush/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use loader::{
    load_file_or_default, with_env_overrides_from, ConfigError, ConfigWarning,
    PROJECT_CONFIG_FILE, USER_CONFIG_PATH,
};
pub use types::{
    AssetsConfig, ColorMode, Config, OutputConfig, PagesConfig, PublishConfig, WalkConfig,
};
