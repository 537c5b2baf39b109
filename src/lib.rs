//! pagepush - publish a static site with one command
//!
//! Stages site files, commits them with a timestamped message, pushes to the
//! configured remote and guesses the public GitHub Pages address from the
//! remote's repository name.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{PublishOptions, PublishResult, PublishStatus, PublishUseCase};
pub use config::{Config, ConfigError, ConfigWarning};
pub use domain::value_objects::{guess_pages_url, Preset, SelectionMode, Strictness};
pub use error::{PublishError, PublishResultOf};
