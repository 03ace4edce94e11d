//! Orchestration services for project lifecycle management.

mod lifecycle;

pub use lifecycle::{ProjectLifecycleError, ProjectLifecycleResult, ProjectLifecycleService};
