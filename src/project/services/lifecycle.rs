//! Service layer for project requests, approval, and archiving.

use crate::directory::domain::UserId;
use crate::project::domain::{NewProject, Project, ProjectDomainError, ProjectId, ProjectRequest};
use crate::project::ports::ProjectGateway;
use crate::remote::ServiceError;
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for project lifecycle operations.
#[derive(Debug, Error)]
pub enum ProjectLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),

    /// Gateway operation failed.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Result type for project lifecycle service operations.
pub type ProjectLifecycleResult<T> = Result<T, ProjectLifecycleError>;

/// Project lifecycle orchestration service.
#[derive(Clone)]
pub struct ProjectLifecycleService<G, C>
where
    G: ProjectGateway,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    clock: Arc<C>,
}

impl<G, C> ProjectLifecycleService<G, C>
where
    G: ProjectGateway,
    C: Clock + Send + Sync,
{
    /// Creates a new project lifecycle service.
    #[must_use]
    pub const fn new(gateway: Arc<G>, clock: Arc<C>) -> Self {
        Self { gateway, clock }
    }

    /// Returns the projects visible to a user.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError::Service`] when the gateway call
    /// fails.
    pub async fn list_for_user(&self, user_id: UserId) -> ProjectLifecycleResult<Vec<Project>> {
        Ok(self.gateway.list_projects(user_id).await?)
    }

    /// Submits a user's project request, producing a draft project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError::Domain`] when the title is empty
    /// or [`ProjectLifecycleError::Service`] when submission fails.
    pub async fn submit_request(
        &self,
        title: impl Into<String>,
        description: Option<String>,
        submitted_by: UserId,
    ) -> ProjectLifecycleResult<Project> {
        let request = ProjectRequest::new(title, description, submitted_by, &*self.clock)?;
        Ok(self.gateway.submit_request(&request).await?)
    }

    /// Creates a project directly in approved status. Admin-only.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError::Domain`] when the title is empty
    /// or [`ProjectLifecycleError::Service`] when creation fails.
    pub async fn create_direct(
        &self,
        title: impl Into<String>,
        description: Option<String>,
        deadline: Option<NaiveDate>,
        created_by: UserId,
    ) -> ProjectLifecycleResult<Project> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ProjectDomainError::EmptyTitle.into());
        }
        let spec = NewProject {
            title,
            description,
            deadline,
            created_by,
        };
        Ok(self.gateway.create_project(&spec).await?)
    }

    /// Approves a draft project. Admin-only.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError::Service`] when the project is
    /// missing or not a draft.
    pub async fn approve(&self, project_id: ProjectId) -> ProjectLifecycleResult<Project> {
        Ok(self.gateway.approve_project(project_id).await?)
    }

    /// Rejects and deletes a draft project. Admin-only.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError::Service`] when the project is
    /// missing or not a draft.
    pub async fn reject(&self, project_id: ProjectId) -> ProjectLifecycleResult<()> {
        Ok(self.gateway.reject_project(project_id).await?)
    }

    /// Archives an approved project. Admin-only, one-way.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError::Service`] when the project is not
    /// approved.
    pub async fn archive(&self, project_id: ProjectId) -> ProjectLifecycleResult<Project> {
        Ok(self.gateway.archive_project(project_id).await?)
    }
}
