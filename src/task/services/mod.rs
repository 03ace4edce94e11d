//! Orchestration services for the task registry.

mod registry;
mod sweep;

pub use registry::{TaskRegistry, TaskRegistryError, TaskRegistryResult};
pub use sweep::{DeadlineSweep, due_soon};
