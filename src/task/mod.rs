//! Task registry: the units of work within the selected stage.
//!
//! Tasks are scoped to exactly one stage and never move between stages.
//! Ordering is creation order; no sort key is persisted. The module also
//! owns day-granularity deadline classification and the deadline sweep
//! that raises notifications for imminent due dates. It follows hexagonal
//! architecture:
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
