//! Domain model for the role catalog and membership roster.

mod error;
mod member;
mod role;

pub use error::DirectoryDomainError;
pub use member::{Member, UserId};
pub use role::{Role, RoleCode, RoleId};
