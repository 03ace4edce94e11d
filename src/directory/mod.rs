//! Read adapters over the external user, membership, and role services.
//!
//! The role catalog and the project membership roster are consumed as
//! read-only reference data: the grid never invents roles or members, it
//! caches what the external services report. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Read-through caches in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
