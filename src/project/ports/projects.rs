//! Gateway port for the external project service.

use crate::directory::domain::UserId;
use crate::project::domain::{NewProject, Project, ProjectId, ProjectRequest};
use crate::remote::ServiceResult;
use async_trait::async_trait;

/// Project service contract.
///
/// Admin-only operations are authorised by the external auth collaborator;
/// an insufficient credential surfaces uniformly as
/// [`crate::remote::ServiceError::Unauthorized`].
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    /// Returns the projects visible to a user.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError`] on transport or credential
    /// failure.
    async fn list_projects(&self, user_id: UserId) -> ServiceResult<Vec<Project>>;

    /// Returns one project by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::NotFound`] when the project
    /// does not exist.
    async fn get_project(&self, project_id: ProjectId) -> ServiceResult<Project>;

    /// Creates a project directly in approved status. Admin-only.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::Validation`] on malformed
    /// fields.
    async fn create_project(&self, spec: &NewProject) -> ServiceResult<Project>;

    /// Submits a user request, creating a draft project.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::Validation`] on malformed
    /// fields.
    async fn submit_request(&self, request: &ProjectRequest) -> ServiceResult<Project>;

    /// Approves a draft project. Admin-only.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::NotFound`] when the project
    /// does not exist or [`crate::remote::ServiceError::Conflict`] when it
    /// is not a draft.
    async fn approve_project(&self, project_id: ProjectId) -> ServiceResult<Project>;

    /// Rejects and deletes a draft project. Admin-only.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::NotFound`] when the project
    /// does not exist or [`crate::remote::ServiceError::Conflict`] when it
    /// is not a draft.
    async fn reject_project(&self, project_id: ProjectId) -> ServiceResult<()>;

    /// Archives an approved project. Admin-only, one-way.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::Conflict`] when the project
    /// is not approved.
    async fn archive_project(&self, project_id: ProjectId) -> ServiceResult<Project>;
}
