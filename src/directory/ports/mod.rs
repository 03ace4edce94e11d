//! Port contracts for the external role and membership services.

pub mod members;
pub mod roles;

pub use members::MembershipGateway;
pub use roles::RoleCatalogGateway;
