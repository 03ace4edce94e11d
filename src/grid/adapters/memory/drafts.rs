//! In-memory draft store for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::grid::domain::{DraftKey, GridDraft};
use crate::grid::ports::DraftStore;
use crate::remote::{ServiceError, ServiceResult};

/// Thread-safe in-memory draft cache.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDraftStore {
    state: Arc<RwLock<HashMap<DraftKey, GridDraft>>>,
}

impl InMemoryDraftStore {
    /// Creates an empty draft cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> ServiceError {
    ServiceError::network(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl DraftStore for InMemoryDraftStore {
    async fn load(&self, key: &DraftKey) -> ServiceResult<Option<GridDraft>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.get(key).cloned())
    }

    async fn save(&self, key: &DraftKey, draft: &GridDraft) -> ServiceResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.insert(*key, draft.clone());
        Ok(())
    }

    async fn clear(&self, key: &DraftKey) -> ServiceResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.remove(key);
        Ok(())
    }
}
