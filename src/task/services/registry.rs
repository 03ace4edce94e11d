//! Task registry service: the tasks of the currently selected stage.

use crate::remote::{ServiceError, ServiceResult};
use crate::stage::domain::StageId;
use crate::task::domain::{NewTask, Priority, Task, TaskDomainError, TaskId};
use crate::task::ports::TaskGateway;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task registry operations.
#[derive(Debug, Error)]
pub enum TaskRegistryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Gateway operation failed.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The task is not present in the registry.
    #[error("unknown task: {0}")]
    UnknownTask(TaskId),
}

/// Result type for task registry operations.
pub type TaskRegistryResult<T> = Result<T, TaskRegistryError>;

/// Cached task list for one stage, in creation order.
pub struct TaskRegistry<G: TaskGateway> {
    gateway: Arc<G>,
    stage_id: Option<StageId>,
    tasks: Vec<Task>,
}

impl<G: TaskGateway> TaskRegistry<G> {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            stage_id: None,
            tasks: Vec::new(),
        }
    }

    /// Returns the stage the registry currently holds tasks for.
    #[must_use]
    pub const fn stage_id(&self) -> Option<StageId> {
        self.stage_id
    }

    /// Returns the cached tasks in creation order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a cached task.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Fetches a stage's tasks without mutating the registry.
    ///
    /// Callers tag the fetch with the selection epoch in effect and adopt
    /// the result through [`Self::adopt`] only when still current.
    ///
    /// # Errors
    ///
    /// Returns the gateway error unchanged.
    pub async fn fetch(&self, stage_id: StageId) -> ServiceResult<Vec<Task>> {
        self.gateway.list_tasks(stage_id).await
    }

    /// Adopts a fetched task list as the registry contents.
    pub fn adopt(&mut self, stage_id: StageId, tasks: Vec<Task>) {
        self.stage_id = Some(stage_id);
        self.tasks = tasks;
    }

    /// Fetches and adopts a stage's tasks in one step.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::Service`] when the fetch fails; the
    /// cached list keeps its previous contents.
    pub async fn refresh(&mut self, stage_id: StageId) -> TaskRegistryResult<()> {
        let tasks = self.fetch(stage_id).await?;
        self.adopt(stage_id, tasks);
        Ok(())
    }

    /// Creates a task in the current stage. Admin-only.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::Domain`] when the title is empty, or
    /// [`TaskRegistryError::Service`] when creation fails or no stage is
    /// selected.
    pub async fn create(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        priority: Priority,
        deadline: Option<NaiveDate>,
    ) -> TaskRegistryResult<TaskId> {
        let stage_id = self
            .stage_id
            .ok_or_else(|| ServiceError::validation("no stage selected"))?;
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle.into());
        }
        let spec = NewTask {
            stage_id,
            title,
            description,
            priority,
            deadline,
        };
        let task = self.gateway.create_task(&spec).await?;
        let task_id = task.id();
        self.tasks.push(task);
        Ok(task_id)
    }

    /// Renames a task. Admin-only; leaves the deadline untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::UnknownTask`] when the task is not
    /// cached, [`TaskRegistryError::Domain`] when the title is empty, or
    /// the gateway error on rejection.
    pub async fn rename(
        &mut self,
        task_id: TaskId,
        title: impl Into<String>,
    ) -> TaskRegistryResult<()> {
        if self.task(task_id).is_none() {
            return Err(TaskRegistryError::UnknownTask(task_id));
        }
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle.into());
        }
        let updated = self.gateway.rename_task(task_id, &title).await?;
        self.replace(updated);
        Ok(())
    }

    /// Sets or clears a task's deadline. Admin-only; leaves the title
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::UnknownTask`] when the task is not
    /// cached, or the gateway error on rejection.
    pub async fn set_deadline(
        &mut self,
        task_id: TaskId,
        deadline: Option<NaiveDate>,
    ) -> TaskRegistryResult<()> {
        if self.task(task_id).is_none() {
            return Err(TaskRegistryError::UnknownTask(task_id));
        }
        let updated = self.gateway.set_deadline(task_id, deadline).await?;
        self.replace(updated);
        Ok(())
    }

    /// Deletes a task. Admin-only.
    ///
    /// The caller must also remove the task's grid row; the server
    /// cascades the assignment delete.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::UnknownTask`] when the task is not
    /// cached, or the gateway error on rejection.
    pub async fn delete(&mut self, task_id: TaskId) -> TaskRegistryResult<()> {
        if self.task(task_id).is_none() {
            return Err(TaskRegistryError::UnknownTask(task_id));
        }
        self.gateway.delete_task(task_id).await?;
        self.tasks.retain(|task| task.id() != task_id);
        Ok(())
    }

    fn replace(&mut self, updated: Task) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id() == updated.id()) {
            *task = updated;
        }
    }
}
