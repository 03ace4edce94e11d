//! In-memory gateways for directory tests.

mod members;
mod roles;

pub use members::InMemoryMembershipGateway;
pub use roles::InMemoryRoleCatalogGateway;
