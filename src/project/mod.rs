//! Project lifecycle management.
//!
//! Projects are created in `draft` status from user-submitted requests or
//! directly as `approved` by an administrator, then approved, rejected, or
//! archived. Archiving is one-way and disables further mutation of stages,
//! tasks, and members, but not viewing. The module follows hexagonal
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
