//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod confirm;
pub mod publish_events;
pub mod version_control;

pub use confirm::{AssumeYes, Confirm};
pub use publish_events::{NoopEventSink, PublishEvent, PublishEventSink};
pub use version_control::{CommandOutput, VcsError, VcsResult, VersionControl};
