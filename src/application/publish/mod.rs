//! Publish Module
//!
//! Orchestrates one publish run.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`PublishOptions`)
//! - `result` - Result types (`PublishResult`, `PublishStatus`)
//! - `use_case` - Core use case logic (`PublishUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use pagepush::application::publish::{PublishOptions, PublishUseCase};
//!
//! let use_case = PublishUseCase::new(git, confirm);
//! let result = use_case.execute(&PublishOptions::new(root, Preset::Html))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::PublishOptions;
pub use result::{PublishResult, PublishStatus};
pub use use_case::PublishUseCase;
