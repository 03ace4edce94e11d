//! Assignment grid: the RACI matrix for the selected stage.
//!
//! Rows are the stage's tasks, columns are the project members, and each
//! cell holds at most one role. Every task's assignment set is persisted
//! as an atomic full replace, loaded and saved through the assignment
//! gateway, with a draft cache carrying unconfirmed edits across
//! navigation. The module follows hexagonal architecture:
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
