//! Read-through caches over the directory gateways.

mod catalog;
mod roster;

pub use catalog::{RoleCatalog, RoleCatalogError};
pub use roster::MembershipRoster;
