//! In-memory membership gateway for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::domain::{Member, UserId};
use crate::directory::ports::MembershipGateway;
use crate::project::domain::ProjectId;
use crate::remote::{ServiceError, ServiceResult};

/// Thread-safe in-memory membership service.
///
/// Users must be registered in the fake user directory before they can be
/// added to a project, mirroring the real service's referential checks.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMembershipGateway {
    state: Arc<RwLock<MembershipState>>,
}

#[derive(Debug, Default)]
struct MembershipState {
    users: HashMap<UserId, Member>,
    rosters: HashMap<ProjectId, Vec<UserId>>,
}

impl InMemoryMembershipGateway {
    /// Creates an empty membership service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user in the fake user directory.
    pub fn register_user(&self, member: Member) {
        if let Ok(mut state) = self.state.write() {
            state.users.insert(member.user_id(), member);
        }
    }

    /// Registers a project so that membership calls against it succeed.
    pub fn register_project(&self, project_id: ProjectId) {
        if let Ok(mut state) = self.state.write() {
            state.rosters.entry(project_id).or_default();
        }
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> ServiceError {
    ServiceError::network(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl MembershipGateway for InMemoryMembershipGateway {
    async fn list_members(&self, project_id: ProjectId) -> ServiceResult<Vec<Member>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let roster = state
            .rosters
            .get(&project_id)
            .ok_or_else(|| ServiceError::not_found(format!("project {project_id}")))?;
        Ok(roster
            .iter()
            .filter_map(|user_id| state.users.get(user_id).cloned())
            .collect())
    }

    async fn add_member(&self, project_id: ProjectId, user_id: UserId) -> ServiceResult<Member> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let member = state
            .users
            .get(&user_id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(format!("user {user_id}")))?;
        let roster = state
            .rosters
            .get_mut(&project_id)
            .ok_or_else(|| ServiceError::not_found(format!("project {project_id}")))?;
        if !roster.contains(&user_id) {
            roster.push(user_id);
        }
        Ok(member)
    }

    async fn remove_member(&self, project_id: ProjectId, user_id: UserId) -> ServiceResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let roster = state
            .rosters
            .get_mut(&project_id)
            .ok_or_else(|| ServiceError::not_found(format!("project {project_id}")))?;
        if !roster.contains(&user_id) {
            return Err(ServiceError::not_found(format!(
                "membership of user {user_id} in project {project_id}"
            )));
        }
        roster.retain(|id| *id != user_id);
        Ok(())
    }
}
