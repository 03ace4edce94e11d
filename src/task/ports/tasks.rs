//! Gateway port for the external task service.

use crate::remote::ServiceResult;
use crate::stage::domain::StageId;
use crate::task::domain::{NewTask, Task, TaskId};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Task persistence contract.
///
/// Title and deadline updates are deliberately separate calls mapping to
/// the same underlying patch operation, so updating one field never
/// clobbers the other.
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Returns a stage's tasks in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::NotFound`] when the stage
    /// does not exist.
    async fn list_tasks(&self, stage_id: StageId) -> ServiceResult<Vec<Task>>;

    /// Creates a task. Admin-only.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::Validation`] on malformed
    /// fields.
    async fn create_task(&self, spec: &NewTask) -> ServiceResult<Task>;

    /// Renames a task. Admin-only.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::NotFound`] when the task
    /// does not exist.
    async fn rename_task(&self, task_id: TaskId, title: &str) -> ServiceResult<Task>;

    /// Sets or clears a task's deadline. Admin-only.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::NotFound`] when the task
    /// does not exist.
    async fn set_deadline(&self, task_id: TaskId, deadline: Option<NaiveDate>)
        -> ServiceResult<Task>;

    /// Deletes a task and, server-side, all of its assignments.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::NotFound`] when the task
    /// does not exist.
    async fn delete_task(&self, task_id: TaskId) -> ServiceResult<()>;
}
