//! In-memory task gateway for tests.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::remote::{ServiceError, ServiceResult};
use crate::stage::domain::StageId;
use crate::task::domain::{NewTask, Task, TaskData, TaskId};
use crate::task::ports::TaskGateway;

/// Thread-safe in-memory task service.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskGateway {
    state: Arc<RwLock<TaskState>>,
}

#[derive(Debug, Default)]
struct TaskState {
    tasks: HashMap<StageId, Vec<Task>>,
    next_id: u64,
}

impl InMemoryTaskGateway {
    /// Creates an empty task service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> ServiceError {
    ServiceError::network(std::io::Error::other(err.to_string()))
}

fn update_task(
    state: &mut TaskState,
    task_id: TaskId,
    update: impl FnOnce(Task) -> Task,
) -> ServiceResult<Task> {
    for tasks in state.tasks.values_mut() {
        if let Some(task) = tasks.iter_mut().find(|task| task.id() == task_id) {
            *task = update(task.clone());
            return Ok(task.clone());
        }
    }
    Err(ServiceError::not_found(format!("task {task_id}")))
}

#[async_trait]
impl TaskGateway for InMemoryTaskGateway {
    async fn list_tasks(&self, stage_id: StageId) -> ServiceResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.get(&stage_id).cloned().unwrap_or_default())
    }

    async fn create_task(&self, spec: &NewTask) -> ServiceResult<Task> {
        if spec.title.trim().is_empty() {
            return Err(ServiceError::validation("task title must not be empty"));
        }
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.next_id += 1;
        let task = Task::from_data(TaskData {
            id: TaskId::new(state.next_id),
            stage_id: spec.stage_id,
            title: spec.title.clone(),
            description: spec.description.clone(),
            priority: spec.priority,
            completed: false,
            deadline: spec.deadline,
            created_at: Utc::now(),
        });
        state.tasks.entry(spec.stage_id).or_default().push(task.clone());
        Ok(task)
    }

    async fn rename_task(&self, task_id: TaskId, title: &str) -> ServiceResult<Task> {
        if title.trim().is_empty() {
            return Err(ServiceError::validation("task title must not be empty"));
        }
        let mut state = self.state.write().map_err(lock_poisoned)?;
        update_task(&mut state, task_id, |task| task.with_title(title))
    }

    async fn set_deadline(
        &self,
        task_id: TaskId,
        deadline: Option<NaiveDate>,
    ) -> ServiceResult<Task> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        update_task(&mut state, task_id, |task| task.with_deadline(deadline))
    }

    async fn delete_task(&self, task_id: TaskId) -> ServiceResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        for tasks in state.tasks.values_mut() {
            if tasks.iter().any(|task| task.id() == task_id) {
                tasks.retain(|task| task.id() != task_id);
                return Ok(());
            }
        }
        Err(ServiceError::not_found(format!("task {task_id}")))
    }
}
