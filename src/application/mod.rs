//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PublishUseCase` - Orchestrates a publish run (check, stage, commit, push, guess URL)

pub mod publish;

pub use publish::{PublishOptions, PublishResult, PublishStatus, PublishUseCase};
