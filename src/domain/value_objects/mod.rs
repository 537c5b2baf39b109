//! Domain Value Objects
//!
//! Immutable value types that describe a publish run.

mod pages_url;
mod pending;
mod selection;

pub use pages_url::{guess_pages_url, RemoteDescriptor, DEFAULT_PAGES_SUFFIX};
pub use pending::PendingChanges;
pub use selection::{Preset, SelectionMode, Strictness};
