//! Session-scoped cache of the global role catalog.

use crate::directory::domain::{DirectoryDomainError, Role, RoleCode};
use crate::directory::ports::RoleCatalogGateway;
use crate::remote::ServiceError;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by role catalog operations.
#[derive(Debug, Error)]
pub enum RoleCatalogError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] DirectoryDomainError),

    /// Gateway operation failed.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The code is already present in the cached catalog.
    #[error("role code '{0}' already exists in the catalog")]
    DuplicateCode(RoleCode),
}

/// Read-through cache of the role catalog, fetched once per session.
///
/// Custom role additions become available immediately for new assignments
/// but never retroactively alter existing assignment rows.
pub struct RoleCatalog<G: RoleCatalogGateway> {
    gateway: Arc<G>,
    roles: Vec<Role>,
    loaded: bool,
}

impl<G: RoleCatalogGateway> RoleCatalog<G> {
    /// Creates an unloaded catalog cache.
    #[must_use]
    pub const fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            roles: Vec::new(),
            loaded: false,
        }
    }

    /// Fetches the catalog unless it is already cached.
    ///
    /// # Errors
    ///
    /// Returns [`RoleCatalogError::Service`] when the initial fetch fails;
    /// the cache stays unloaded so a later call retries.
    pub async fn ensure_loaded(&mut self) -> Result<(), RoleCatalogError> {
        if self.loaded {
            return Ok(());
        }
        self.roles = self.gateway.list_roles().await?;
        self.loaded = true;
        Ok(())
    }

    /// Returns the cached roles.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Looks up a role by its code.
    #[must_use]
    pub fn find_by_code(&self, code: &str) -> Option<&Role> {
        let trimmed = code.trim();
        self.roles.iter().find(|role| role.code().as_str() == trimmed)
    }

    /// Creates a custom role and appends it to the cache.
    ///
    /// The duplicate check here is a client-side guard; the service
    /// enforces uniqueness authoritatively and may still report a
    /// conflict.
    ///
    /// # Errors
    ///
    /// Returns [`RoleCatalogError::DuplicateCode`] when the code is
    /// already cached, or [`RoleCatalogError::Service`] when the gateway
    /// rejects the creation.
    pub async fn add_custom(&mut self, code: RoleCode) -> Result<Role, RoleCatalogError> {
        if self.find_by_code(code.as_str()).is_some() {
            return Err(RoleCatalogError::DuplicateCode(code));
        }
        let role = self.gateway.create_role(&code).await?;
        self.roles.push(role.clone());
        Ok(role)
    }
}
