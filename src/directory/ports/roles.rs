//! Gateway port for the global role catalog service.

use crate::directory::domain::{Role, RoleCode};
use crate::remote::ServiceResult;
use async_trait::async_trait;

/// Role catalog contract.
///
/// The catalog is global (not project-scoped) and admin-extensible with
/// custom codes. Code uniqueness is enforced server-side.
#[async_trait]
pub trait RoleCatalogGateway: Send + Sync {
    /// Returns every role in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError`] on transport or credential
    /// failure.
    async fn list_roles(&self) -> ServiceResult<Vec<Role>>;

    /// Creates a custom role with the given code.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::Conflict`] when the code
    /// already exists in the catalog.
    async fn create_role(&self, code: &RoleCode) -> ServiceResult<Role>;
}
