//! Domain Layer
//!
//! Pure publishing rules without process or terminal dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Per-run entities (CommitRequest)
//! - `value_objects/` - Immutable value types (SelectionMode, Strictness, RemoteDescriptor)
//! - `services/` - Domain services (stage planning, essential asset check)
//! - `ports/` - Interface definitions for infrastructure (VersionControl, Confirm, events)
//!
//! Services only read the working directory; every mutation goes through a port.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
