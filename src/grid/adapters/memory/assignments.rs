//! In-memory assignment gateway for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::domain::UserId;
use crate::grid::domain::AssignmentEntry;
use crate::grid::ports::AssignmentGateway;
use crate::remote::{ServiceError, ServiceResult};
use crate::task::domain::TaskId;

/// Thread-safe in-memory assignment service.
///
/// Tasks must be registered before assignments can be fetched or
/// replaced; forgetting a task emulates the server-side cascade of a
/// task delete, after which fetches fail with not-found.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssignmentGateway {
    state: Arc<RwLock<HashMap<TaskId, Vec<AssignmentEntry>>>>,
}

impl InMemoryAssignmentGateway {
    /// Creates an empty assignment service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a task with an empty assignment list.
    pub fn register_task(&self, task_id: TaskId) {
        if let Ok(mut state) = self.state.write() {
            state.entry(task_id).or_default();
        }
    }

    /// Drops a task's assignments, as the server does on task delete.
    pub fn forget_task(&self, task_id: TaskId) {
        if let Ok(mut state) = self.state.write() {
            state.remove(&task_id);
        }
    }

    /// Removes a user's entries everywhere, as the server does on member
    /// removal.
    pub fn purge_user(&self, user_id: UserId) {
        if let Ok(mut state) = self.state.write() {
            for entries in state.values_mut() {
                entries.retain(|entry| entry.user_id != user_id);
            }
        }
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> ServiceError {
    ServiceError::network(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl AssignmentGateway for InMemoryAssignmentGateway {
    async fn fetch_assignments(&self, task_id: TaskId) -> ServiceResult<Vec<AssignmentEntry>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        state
            .get(&task_id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(format!("task {task_id}")))
    }

    async fn replace_assignments(
        &self,
        task_id: TaskId,
        entries: &[AssignmentEntry],
    ) -> ServiceResult<Vec<AssignmentEntry>> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let stored = state
            .get_mut(&task_id)
            .ok_or_else(|| ServiceError::not_found(format!("task {task_id}")))?;
        *stored = entries.to_vec();
        Ok(stored.clone())
    }
}
