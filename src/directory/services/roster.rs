//! Read-through cache of a project's membership list.

use crate::directory::domain::{Member, UserId};
use crate::directory::ports::MembershipGateway;
use crate::project::domain::ProjectId;
use crate::remote::ServiceResult;
use std::sync::Arc;

/// Cached view of the users assigned to one project.
///
/// The roster is read-only to the grid; add/remove requests are delegated
/// to the membership service and followed by a refetch, keeping the server
/// as the source of truth.
pub struct MembershipRoster<G: MembershipGateway> {
    gateway: Arc<G>,
    project_id: ProjectId,
    members: Vec<Member>,
}

impl<G: MembershipGateway> MembershipRoster<G> {
    /// Creates an empty roster for a project.
    #[must_use]
    pub const fn new(gateway: Arc<G>, project_id: ProjectId) -> Self {
        Self {
            gateway,
            project_id,
            members: Vec::new(),
        }
    }

    /// Refetches the membership list from the service.
    ///
    /// # Errors
    ///
    /// Returns the gateway error unchanged; the cached list keeps its
    /// previous contents on failure.
    pub async fn refresh(&mut self) -> ServiceResult<()> {
        self.members = self.gateway.list_members(self.project_id).await?;
        Ok(())
    }

    /// Returns the cached members.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Returns whether the user is currently in the cached roster.
    #[must_use]
    pub fn contains(&self, user_id: UserId) -> bool {
        self.members.iter().any(|member| member.user_id() == user_id)
    }

    /// Adds a user to the project and refreshes the cache.
    ///
    /// # Errors
    ///
    /// Returns the gateway error from either the mutation or the refetch.
    pub async fn add(&mut self, user_id: UserId) -> ServiceResult<()> {
        self.gateway.add_member(self.project_id, user_id).await?;
        self.refresh().await
    }

    /// Removes a user from the project and refreshes the cache.
    ///
    /// The server cascade-clears the member's assignments; callers must
    /// also clear the member's grid column and invalidate loaded rows.
    ///
    /// # Errors
    ///
    /// Returns the gateway error from either the mutation or the refetch.
    pub async fn remove(&mut self, user_id: UserId) -> ServiceResult<()> {
        self.gateway.remove_member(self.project_id, user_id).await?;
        self.refresh().await
    }
}
