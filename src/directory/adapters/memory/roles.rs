//! In-memory role catalog gateway for tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::directory::domain::{Role, RoleCode, RoleId};
use crate::directory::ports::RoleCatalogGateway;
use crate::remote::{ServiceError, ServiceResult};

/// Thread-safe in-memory role catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoleCatalogGateway {
    state: Arc<RwLock<CatalogState>>,
}

#[derive(Debug, Default)]
struct CatalogState {
    roles: Vec<Role>,
    next_id: u64,
    list_calls: u64,
}

impl InMemoryRoleCatalogGateway {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-seeded with the standard RACI codes.
    ///
    /// # Panics
    ///
    /// Does not panic: the seeded codes are non-empty literals.
    #[must_use]
    pub fn seeded() -> Self {
        let gateway = Self::new();
        if let Ok(mut state) = gateway.state.write() {
            for code in ["R", "A", "C", "I"] {
                state.next_id += 1;
                let id = RoleId::new(state.next_id);
                if let Ok(parsed) = RoleCode::new(code) {
                    state.roles.push(Role::new(id, parsed, false));
                }
            }
        }
        gateway
    }

    /// Returns how many times `list_roles` has been served.
    ///
    /// Used by tests asserting the once-per-session cache behaviour.
    #[must_use]
    pub fn list_calls(&self) -> u64 {
        self.state.read().map(|state| state.list_calls).unwrap_or(0)
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> ServiceError {
    ServiceError::network(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl RoleCatalogGateway for InMemoryRoleCatalogGateway {
    async fn list_roles(&self) -> ServiceResult<Vec<Role>> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.list_calls += 1;
        Ok(state.roles.clone())
    }

    async fn create_role(&self, code: &RoleCode) -> ServiceResult<Role> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.roles.iter().any(|role| role.code() == code) {
            return Err(ServiceError::conflict(format!(
                "role code '{code}' already exists"
            )));
        }
        state.next_id += 1;
        let role = Role::new(RoleId::new(state.next_id), code.clone(), true);
        state.roles.push(role.clone());
        Ok(role)
    }
}
