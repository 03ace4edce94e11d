//! Stage directory: the ordered phases of a project.
//!
//! The directory owns the stage list and the current stage selection.
//! Selecting a different stage invalidates the task registry and the
//! per-task assignment state; the selection epoch lets late fetch
//! responses for an abandoned selection be discarded. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
