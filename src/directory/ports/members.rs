//! Gateway port for the project membership service.

use crate::directory::domain::{Member, UserId};
use crate::project::domain::ProjectId;
use crate::remote::ServiceResult;
use async_trait::async_trait;

/// Project membership contract.
///
/// Removing a member cascade-clears that member's assignments in every
/// task of the project on the server side; the client re-fetches rather
/// than trusting its own copy.
#[async_trait]
pub trait MembershipGateway: Send + Sync {
    /// Returns the members of a project with denormalized display fields.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::NotFound`] when the project
    /// does not exist.
    async fn list_members(&self, project_id: ProjectId) -> ServiceResult<Vec<Member>>;

    /// Adds a user to a project.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::NotFound`] when the project
    /// or user does not exist.
    async fn add_member(&self, project_id: ProjectId, user_id: UserId) -> ServiceResult<Member>;

    /// Removes a user from a project.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::NotFound`] when the project
    /// or membership does not exist.
    async fn remove_member(&self, project_id: ProjectId, user_id: UserId) -> ServiceResult<()>;
}
