//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all process and terminal I/O.
//!
//! ## Structure
//!
//! - `git/` - Version control through the git command line
//! - `prompt/` - Line-based confirmation for non-interactive stdin
//! - `events/` - Machine-readable event output

pub mod events;
pub mod git;
pub mod prompt;

// Re-export for convenience
pub use events::JsonEventSink;
pub use git::GitCli;
pub use prompt::LineConfirm;
