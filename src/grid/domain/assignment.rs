//! Per-task assignment sets with the at-most-one-role invariant.

use crate::directory::domain::{RoleId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// One (user, role) entry in a task's submitted assignment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentEntry {
    /// Assigned member.
    pub user_id: UserId,
    /// Assigned role.
    pub role_id: RoleId,
}

/// The assignment set of one task: each member maps to at most one role.
///
/// The invariant holds by construction; the map cannot represent two
/// roles for the same user. Removal is expressed by omission from
/// [`AssignmentSet::entries`], never by a null-role entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentSet {
    roles: BTreeMap<UserId, RoleId>,
}

impl AssignmentSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            roles: BTreeMap::new(),
        }
    }

    /// Builds a set from a fetched entry list.
    ///
    /// Backend data carrying multiple roles for one user collapses to the
    /// first entry seen; later duplicates are logged and dropped.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = AssignmentEntry>) -> Self {
        let mut roles = BTreeMap::new();
        for entry in entries {
            if roles.contains_key(&entry.user_id) {
                warn!(user = %entry.user_id, "duplicate role for user in fetched assignments, keeping first");
                continue;
            }
            roles.insert(entry.user_id, entry.role_id);
        }
        Self { roles }
    }

    /// Returns the role assigned to a user, if any.
    #[must_use]
    pub fn role_for(&self, user_id: UserId) -> Option<RoleId> {
        self.roles.get(&user_id).copied()
    }

    /// Returns a copy with the user's cell set or cleared.
    ///
    /// `None` removes the user's entry, which propagates as omission from
    /// the submitted list.
    #[must_use]
    pub fn with_cell(&self, user_id: UserId, role_id: Option<RoleId>) -> Self {
        let mut roles = self.roles.clone();
        match role_id {
            Some(role_id) => {
                roles.insert(user_id, role_id);
            }
            None => {
                roles.remove(&user_id);
            }
        }
        Self { roles }
    }

    /// Removes a user's entry in place. Returns whether one was present.
    pub fn clear_user(&mut self, user_id: UserId) -> bool {
        self.roles.remove(&user_id).is_some()
    }

    /// Returns the entries in user-id order, ready for submission.
    #[must_use]
    pub fn entries(&self) -> Vec<AssignmentEntry> {
        self.roles
            .iter()
            .map(|(user_id, role_id)| AssignmentEntry {
                user_id: *user_id,
                role_id: *role_id,
            })
            .collect()
    }

    /// Returns the number of assigned cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Returns whether no cell is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
