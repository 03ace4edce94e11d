//! Gateway port for the external assignment service.

use crate::grid::domain::AssignmentEntry;
use crate::remote::ServiceResult;
use crate::task::domain::TaskId;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Assignment persistence contract.
///
/// Writes are full replaces: submitting a task's assignment list replaces
/// all of that task's assignments atomically. This avoids lost updates
/// between admins editing different cells of the same task only when
/// submissions are serialised; concurrent edits to the same task from two
/// sessions are last-write-wins, a documented limitation rather than a
/// guarantee.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AssignmentGateway: Send + Sync {
    /// Returns a task's current assignment list.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::NotFound`] when the task
    /// does not exist (including after a cascading task delete).
    async fn fetch_assignments(&self, task_id: TaskId) -> ServiceResult<Vec<AssignmentEntry>>;

    /// Atomically replaces a task's assignment list.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::Validation`] when an entry
    /// references an unknown role or user, or
    /// [`crate::remote::ServiceError::NotFound`] when the task does not
    /// exist.
    async fn replace_assignments(
        &self,
        task_id: TaskId,
        entries: &[AssignmentEntry],
    ) -> ServiceResult<Vec<AssignmentEntry>>;
}
