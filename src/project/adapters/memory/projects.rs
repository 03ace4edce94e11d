//! In-memory project gateway for tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::domain::UserId;
use crate::project::domain::{
    NewProject, Project, ProjectData, ProjectId, ProjectRequest, ProjectStatus,
};
use crate::project::ports::ProjectGateway;
use crate::remote::{ServiceError, ServiceResult};

/// Thread-safe in-memory project service.
///
/// Membership-based visibility filtering is the real server's concern;
/// this fake returns every stored project from `list_projects`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectGateway {
    state: Arc<RwLock<ProjectState>>,
}

#[derive(Debug, Default)]
struct ProjectState {
    projects: HashMap<ProjectId, Project>,
    next_id: u64,
}

impl InMemoryProjectGateway {
    /// Creates an empty project service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> ServiceError {
    ServiceError::network(std::io::Error::other(err.to_string()))
}

fn missing(project_id: ProjectId) -> ServiceError {
    ServiceError::not_found(format!("project {project_id}"))
}

impl ProjectState {
    fn insert(&mut self, title: String, description: Option<String>, status: ProjectStatus, created_by: UserId) -> Project {
        self.next_id += 1;
        let project = Project::from_data(ProjectData {
            id: ProjectId::new(self.next_id),
            title,
            description,
            deadline: None,
            status,
            created_at: Utc::now(),
            created_by,
        });
        self.projects.insert(project.id(), project.clone());
        project
    }
}

#[async_trait]
impl ProjectGateway for InMemoryProjectGateway {
    async fn list_projects(&self, _user_id: UserId) -> ServiceResult<Vec<Project>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut projects: Vec<Project> = state.projects.values().cloned().collect();
        projects.sort_by_key(Project::id);
        Ok(projects)
    }

    async fn get_project(&self, project_id: ProjectId) -> ServiceResult<Project> {
        let state = self.state.read().map_err(lock_poisoned)?;
        state
            .projects
            .get(&project_id)
            .cloned()
            .ok_or_else(|| missing(project_id))
    }

    async fn create_project(&self, spec: &NewProject) -> ServiceResult<Project> {
        if spec.title.trim().is_empty() {
            return Err(ServiceError::validation("title must not be empty"));
        }
        let mut state = self.state.write().map_err(lock_poisoned)?;
        Ok(state.insert(
            spec.title.clone(),
            spec.description.clone(),
            ProjectStatus::Approved,
            spec.created_by,
        ))
    }

    async fn submit_request(&self, request: &ProjectRequest) -> ServiceResult<Project> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        Ok(state.insert(
            request.title().to_owned(),
            request.description().map(str::to_owned),
            ProjectStatus::Draft,
            request.submitted_by(),
        ))
    }

    async fn approve_project(&self, project_id: ProjectId) -> ServiceResult<Project> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let project = state
            .projects
            .get_mut(&project_id)
            .ok_or_else(|| missing(project_id))?;
        project
            .approve()
            .map_err(|err| ServiceError::conflict(err.to_string()))?;
        Ok(project.clone())
    }

    async fn reject_project(&self, project_id: ProjectId) -> ServiceResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let status = state
            .projects
            .get(&project_id)
            .map(Project::status)
            .ok_or_else(|| missing(project_id))?;
        if !matches!(status, ProjectStatus::Draft) {
            return Err(ServiceError::conflict("only drafts can be rejected"));
        }
        state.projects.remove(&project_id);
        Ok(())
    }

    async fn archive_project(&self, project_id: ProjectId) -> ServiceResult<Project> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let project = state
            .projects
            .get_mut(&project_id)
            .ok_or_else(|| missing(project_id))?;
        project
            .archive()
            .map_err(|err| ServiceError::conflict(err.to_string()))?;
        Ok(project.clone())
    }
}
