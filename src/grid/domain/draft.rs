//! Draft cache entries: unconfirmed edits kept across navigation.

use super::AssignmentEntry;
use crate::project::domain::ProjectId;
use crate::stage::domain::StageId;
use crate::task::domain::TaskId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Key for one grid view's draft entry: the (project, stage) pair the
/// grid was showing when the draft was stashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftKey {
    /// Project the grid belongs to.
    pub project_id: ProjectId,
    /// Stage whose matrix was being edited.
    pub stage_id: StageId,
}

/// In-progress cell edits stashed before server confirmation.
///
/// Stored through an injectable [`DraftStore`](crate::grid::ports::DraftStore)
/// and carries its own staleness timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDraft {
    saved_at: DateTime<Utc>,
    rows: BTreeMap<TaskId, Vec<AssignmentEntry>>,
}

impl GridDraft {
    /// Creates an empty draft stamped with the stash time.
    #[must_use]
    pub const fn new(saved_at: DateTime<Utc>) -> Self {
        Self {
            saved_at,
            rows: BTreeMap::new(),
        }
    }

    /// Records one task's entry list.
    pub fn set_row(&mut self, task_id: TaskId, entries: Vec<AssignmentEntry>) {
        self.rows.insert(task_id, entries);
    }

    /// Returns the stash timestamp.
    #[must_use]
    pub const fn saved_at(&self) -> DateTime<Utc> {
        self.saved_at
    }

    /// Returns the recorded rows.
    #[must_use]
    pub const fn rows(&self) -> &BTreeMap<TaskId, Vec<AssignmentEntry>> {
        &self.rows
    }

    /// Returns whether the draft is older than `max_age` at `now`.
    #[must_use]
    pub fn is_stale(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        let age = now.signed_duration_since(self.saved_at);
        match chrono::Duration::from_std(max_age) {
            Ok(limit) => age > limit,
            // An unrepresentable limit never expires anything.
            Err(_) => false,
        }
    }

    /// Returns whether the draft records no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
