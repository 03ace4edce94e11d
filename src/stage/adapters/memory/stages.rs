//! In-memory stage gateway for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::project::domain::ProjectId;
use crate::remote::{ServiceError, ServiceResult};
use crate::stage::domain::{NewStage, Stage, StageId};
use crate::stage::ports::StageGateway;

/// Thread-safe in-memory stage service.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStageGateway {
    state: Arc<RwLock<StageState>>,
}

#[derive(Debug, Default)]
struct StageState {
    stages: HashMap<ProjectId, Vec<Stage>>,
    next_id: u64,
}

impl InMemoryStageGateway {
    /// Creates an empty stage service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a project so that stage calls against it succeed.
    pub fn register_project(&self, project_id: ProjectId) {
        if let Ok(mut state) = self.state.write() {
            state.stages.entry(project_id).or_default();
        }
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> ServiceError {
    ServiceError::network(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl StageGateway for InMemoryStageGateway {
    async fn list_stages(&self, project_id: ProjectId) -> ServiceResult<Vec<Stage>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        state
            .stages
            .get(&project_id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(format!("project {project_id}")))
    }

    async fn create_stage(&self, spec: &NewStage) -> ServiceResult<Stage> {
        if spec.title.trim().is_empty() {
            return Err(ServiceError::validation("stage title must not be empty"));
        }
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.next_id += 1;
        let stage = Stage::new(
            StageId::new(state.next_id),
            spec.project_id,
            spec.title.clone(),
            spec.status,
            spec.sequence,
            spec.deadline,
        );
        let stages = state
            .stages
            .get_mut(&spec.project_id)
            .ok_or_else(|| ServiceError::not_found(format!("project {}", spec.project_id)))?;
        stages.push(stage.clone());
        Ok(stage)
    }

    async fn rename_stage(&self, stage_id: StageId, title: &str) -> ServiceResult<Stage> {
        if title.trim().is_empty() {
            return Err(ServiceError::validation("stage title must not be empty"));
        }
        let mut state = self.state.write().map_err(lock_poisoned)?;
        for stages in state.stages.values_mut() {
            if let Some(stage) = stages.iter_mut().find(|stage| stage.id() == stage_id) {
                *stage = stage.clone().with_title(title);
                return Ok(stage.clone());
            }
        }
        Err(ServiceError::not_found(format!("stage {stage_id}")))
    }

    async fn delete_stage(&self, stage_id: StageId) -> ServiceResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        for stages in state.stages.values_mut() {
            if stages.iter().any(|stage| stage.id() == stage_id) {
                stages.retain(|stage| stage.id() != stage_id);
                return Ok(());
            }
        }
        Err(ServiceError::not_found(format!("stage {stage_id}")))
    }
}
