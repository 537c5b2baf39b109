//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use pagepush::presentation::{factory, Cli};
//!
//! let options = factory::publish_options(&cli, &config, &root);
//! let use_case = factory::create_publish_use_case(&config, &root, AssumeYes);
//! let result = use_case.execute(&options);
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::create_publish_use_case;
