//! The assignment grid: per-row load/save state for one stage's matrix.

use crate::directory::domain::{Member, Role, UserId};
use crate::grid::domain::{
    AssignmentEntry, AssignmentSet, DraftKey, GridDraft, GridError, GridResult, RowState,
};
use crate::grid::ports::{AssignmentGateway, DraftStore};
use crate::remote::{self, ServiceResult};
use crate::task::domain::{Task, TaskId};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use super::GridConfig;

/// Matrix editor state for one (project, stage) view.
///
/// Rows are tasks, columns are project members, and each cell holds at
/// most one role. Every row tracks its own [`RowState`] so a slow fetch or
/// save on one task never blocks edits elsewhere in the grid.
///
/// Remote calls are split-phase: `begin_*` records the transition and
/// returns what must be submitted, `complete_*` reconciles the row to the
/// server's answer. The async convenience wrappers drive both phases with
/// the configured timeout.
pub struct AssignmentGrid<G, D, C>
where
    G: AssignmentGateway,
    D: DraftStore,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    drafts: Arc<D>,
    clock: Arc<C>,
    config: GridConfig,
    key: Option<DraftKey>,
    columns: Vec<Member>,
    roles: Vec<Role>,
    row_order: Vec<TaskId>,
    rows: HashMap<TaskId, RowState>,
    last_error: Option<String>,
}

impl<G, D, C> AssignmentGrid<G, D, C>
where
    G: AssignmentGateway,
    D: DraftStore,
    C: Clock + Send + Sync,
{
    /// Creates an unbound grid.
    #[must_use]
    pub fn new(gateway: Arc<G>, drafts: Arc<D>, clock: Arc<C>, config: GridConfig) -> Self {
        Self {
            gateway,
            drafts,
            clock,
            config,
            key: None,
            columns: Vec::new(),
            roles: Vec::new(),
            row_order: Vec::new(),
            rows: HashMap::new(),
            last_error: None,
        }
    }

    /// Binds the grid to a stage view, resetting every row to unloaded.
    ///
    /// Rows appear in the order of `tasks`. Any prior binding, including
    /// in-flight row states, is discarded.
    pub fn bind(&mut self, key: DraftKey, tasks: &[Task], columns: Vec<Member>, roles: Vec<Role>) {
        self.key = Some(key);
        self.columns = columns;
        self.roles = roles;
        self.row_order = tasks.iter().map(Task::id).collect();
        self.rows = self
            .row_order
            .iter()
            .map(|task_id| (*task_id, RowState::Unloaded))
            .collect();
        self.last_error = None;
        debug!(stage = %key.stage_id, rows = self.row_order.len(), "grid bound");
    }

    /// Returns whether the grid is bound to a stage view.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.key.is_some()
    }

    /// Returns the bound (project, stage) key, if any.
    #[must_use]
    pub const fn key(&self) -> Option<DraftKey> {
        self.key
    }

    /// Returns the member columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Member] {
        &self.columns
    }

    /// Returns the role catalog snapshot the grid resolves codes against.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Returns the task rows in display order.
    #[must_use]
    pub fn row_ids(&self) -> &[TaskId] {
        &self.row_order
    }

    /// Returns a row's state, if the task has a row.
    #[must_use]
    pub fn row_state(&self, task_id: TaskId) -> Option<&RowState> {
        self.rows.get(&task_id)
    }

    /// Returns the role code rendered in a cell, if one is assigned.
    ///
    /// While a save is in flight the submitted value is rendered, not the
    /// last confirmed one.
    #[must_use]
    pub fn cell_code(&self, task_id: TaskId, user_id: UserId) -> Option<&str> {
        let set = self.rows.get(&task_id)?.displayed()?;
        let role_id = set.role_for(user_id)?;
        self.roles
            .iter()
            .find(|role| role.id() == role_id)
            .map(|role| role.code().as_str())
    }

    /// Returns the most recent non-fatal error message, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Clears the recorded error message.
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Replaces the role catalog snapshot, e.g. after a custom role is
    /// created mid-session.
    pub fn adopt_roles(&mut self, roles: Vec<Role>) {
        self.roles = roles;
    }

    /// Appends a row for a newly created task, starting unloaded.
    ///
    /// A no-op when the task already has a row.
    pub fn add_row(&mut self, task_id: TaskId) {
        if self.rows.contains_key(&task_id) {
            return;
        }
        self.row_order.push(task_id);
        self.rows.insert(task_id, RowState::Unloaded);
    }

    /// Drops a task's row, e.g. after a task delete cascades server-side.
    pub fn remove_row(&mut self, task_id: TaskId) {
        self.rows.remove(&task_id);
        self.row_order.retain(|id| *id != task_id);
    }

    /// Appends a member column. New members start unassigned everywhere,
    /// so loaded rows stay valid and no refetch is needed.
    pub fn add_column(&mut self, member: Member) {
        if self.columns.iter().any(|m| m.user_id() == member.user_id()) {
            return;
        }
        self.columns.push(member);
    }

    /// Drops a member's column and invalidates every row.
    ///
    /// The server cascade-clears the member's assignments on removal, so
    /// cached sets can no longer be trusted; rows fall back to unloaded
    /// and refetch on demand.
    pub fn clear_member(&mut self, user_id: UserId) {
        self.columns.retain(|member| member.user_id() != user_id);
        for state in self.rows.values_mut() {
            *state = RowState::Unloaded;
        }
        debug!(user = %user_id, "member column cleared, rows invalidated");
    }

    /// Marks a row loading.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnknownTask`] when the task has no row, or
    /// [`GridError::SaveInFlight`] when a save is pending; the save's
    /// completion will reconcile the row instead.
    pub fn begin_load(&mut self, task_id: TaskId) -> GridResult<()> {
        let state = self
            .rows
            .get_mut(&task_id)
            .ok_or(GridError::UnknownTask(task_id))?;
        if matches!(state, RowState::Saving { .. }) {
            return Err(GridError::SaveInFlight(task_id));
        }
        *state = RowState::Loading;
        Ok(())
    }

    /// Reconciles a row to a fetch result.
    ///
    /// Success adopts the fetched set; failure marks the row load-failed,
    /// records the error for the caller's banner, and propagates it.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NothingPending`] when the row is not loading,
    /// or the fetch error after recording it.
    pub fn complete_load(
        &mut self,
        task_id: TaskId,
        result: ServiceResult<Vec<AssignmentEntry>>,
    ) -> GridResult<()> {
        let state = self
            .rows
            .get_mut(&task_id)
            .ok_or(GridError::UnknownTask(task_id))?;
        if !matches!(state, RowState::Loading) {
            return Err(GridError::NothingPending(task_id));
        }
        match result {
            Ok(entries) => {
                *state = RowState::Loaded(AssignmentSet::from_entries(entries));
                Ok(())
            }
            Err(err) => {
                *state = RowState::LoadFailed;
                warn!(task = %task_id, error = %err, "row load failed");
                self.last_error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Fetches one row's assignments under the configured timeout.
    ///
    /// # Errors
    ///
    /// As [`Self::begin_load`] and [`Self::complete_load`].
    pub async fn load_row(&mut self, task_id: TaskId) -> GridResult<()> {
        self.begin_load(task_id)?;
        let gateway = Arc::clone(&self.gateway);
        let result = remote::with_timeout(
            self.config.request_timeout,
            gateway.fetch_assignments(task_id),
        )
        .await;
        self.complete_load(task_id, result)
    }

    /// Loads every row that is not yet loaded, stopping at the first
    /// failure.
    ///
    /// # Errors
    ///
    /// As [`Self::load_row`].
    pub async fn load_all(&mut self) -> GridResult<()> {
        let pending: Vec<TaskId> = self
            .row_order
            .iter()
            .copied()
            .filter(|id| {
                matches!(
                    self.rows.get(id),
                    Some(RowState::Unloaded | RowState::LoadFailed)
                )
            })
            .collect();
        for task_id in pending {
            self.load_row(task_id).await?;
        }
        Ok(())
    }

    /// Starts a cell edit and returns the full entry list to submit.
    ///
    /// An empty (or whitespace-only) `code` clears the cell; the entry is
    /// then omitted from the submission. The row transitions to saving and
    /// renders the submitted set until [`Self::complete_edit`] reconciles
    /// it.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Unbound`] before any binding,
    /// [`GridError::UnknownTask`] / [`GridError::UnknownMember`] /
    /// [`GridError::UnknownRole`] for an unresolvable cell,
    /// [`GridError::SaveInFlight`] when this row is already saving, or
    /// [`GridError::RowNotLoaded`] when no confirmed set exists to edit.
    pub fn begin_edit(
        &mut self,
        task_id: TaskId,
        user_id: UserId,
        code: &str,
    ) -> GridResult<Vec<AssignmentEntry>> {
        if self.key.is_none() {
            return Err(GridError::Unbound);
        }
        if !self.columns.iter().any(|m| m.user_id() == user_id) {
            return Err(GridError::UnknownMember(user_id));
        }
        let trimmed = code.trim();
        let role_id = if trimmed.is_empty() {
            None
        } else {
            Some(
                self.roles
                    .iter()
                    .find(|role| role.code().as_str() == trimmed)
                    .map(Role::id)
                    .ok_or_else(|| GridError::UnknownRole(trimmed.to_owned()))?,
            )
        };
        let state = self
            .rows
            .get_mut(&task_id)
            .ok_or(GridError::UnknownTask(task_id))?;
        let known_good = match state {
            RowState::Loaded(set) => set.clone(),
            RowState::Saving { .. } => return Err(GridError::SaveInFlight(task_id)),
            RowState::Unloaded | RowState::Loading | RowState::LoadFailed => {
                return Err(GridError::RowNotLoaded(task_id));
            }
        };
        let submitted = known_good.with_cell(user_id, role_id);
        let entries = submitted.entries();
        *state = RowState::Saving {
            known_good,
            submitted,
        };
        Ok(entries)
    }

    /// Reconciles a row to a save result.
    ///
    /// Success adopts the server's accepted list, which is authoritative
    /// over the submitted one. Failure reverts to the known-good set,
    /// records the error for the caller's banner, and propagates it.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NothingPending`] when the row is not saving,
    /// or the save error after reverting.
    pub fn complete_edit(
        &mut self,
        task_id: TaskId,
        result: ServiceResult<Vec<AssignmentEntry>>,
    ) -> GridResult<()> {
        let state = self
            .rows
            .get_mut(&task_id)
            .ok_or(GridError::UnknownTask(task_id))?;
        let RowState::Saving { known_good, .. } = state else {
            return Err(GridError::NothingPending(task_id));
        };
        match result {
            Ok(accepted) => {
                *state = RowState::Loaded(AssignmentSet::from_entries(accepted));
                Ok(())
            }
            Err(err) => {
                *state = RowState::Loaded(known_good.clone());
                warn!(task = %task_id, error = %err, "cell save failed, reverted");
                self.last_error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Sets or clears one cell under the configured timeout.
    ///
    /// # Errors
    ///
    /// As [`Self::begin_edit`] and [`Self::complete_edit`].
    pub async fn set_cell(
        &mut self,
        task_id: TaskId,
        user_id: UserId,
        code: &str,
    ) -> GridResult<()> {
        let entries = self.begin_edit(task_id, user_id, code)?;
        let gateway = Arc::clone(&self.gateway);
        let result = remote::with_timeout(
            self.config.request_timeout,
            gateway.replace_assignments(task_id, &entries),
        )
        .await;
        self.complete_edit(task_id, result)
    }

    /// Stashes the currently rendered sets as a draft.
    ///
    /// Rows without a renderable set are skipped. An all-empty snapshot
    /// clears the stored draft instead of saving one.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Unbound`] before any binding, or the store
    /// error.
    pub async fn stash_draft(&self) -> GridResult<()> {
        let key = self.key.ok_or(GridError::Unbound)?;
        let mut draft = GridDraft::new(self.clock.utc());
        for task_id in &self.row_order {
            if let Some(set) = self.rows.get(task_id).and_then(RowState::displayed) {
                draft.set_row(*task_id, set.entries());
            }
        }
        if draft.is_empty() {
            self.drafts.clear(&key).await?;
        } else {
            self.drafts.save(&key, &draft).await?;
        }
        Ok(())
    }

    /// Restores a stashed draft into matching rows.
    ///
    /// Returns whether a draft was applied. A stale draft is discarded and
    /// cleared rather than applied; draft rows for tasks no longer in the
    /// grid are ignored. Restored rows are marked loaded, so the next save
    /// submits against the draft as its baseline.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Unbound`] before any binding, or the store
    /// error.
    pub async fn restore_draft(&mut self) -> GridResult<bool> {
        let key = self.key.ok_or(GridError::Unbound)?;
        let Some(draft) = self.drafts.load(&key).await? else {
            return Ok(false);
        };
        if draft.is_stale(self.clock.utc(), self.config.draft_max_age) {
            warn!(stage = %key.stage_id, "stale draft discarded");
            self.drafts.clear(&key).await?;
            return Ok(false);
        }
        let mut applied = false;
        for (task_id, entries) in draft.rows() {
            if let Some(state) = self.rows.get_mut(task_id) {
                *state = RowState::Loaded(AssignmentSet::from_entries(entries.iter().copied()));
                applied = true;
            }
        }
        Ok(applied)
    }

    /// Clears the stored draft for the bound view.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Unbound`] before any binding, or the store
    /// error.
    pub async fn clear_draft(&self) -> GridResult<()> {
        let key = self.key.ok_or(GridError::Unbound)?;
        self.drafts.clear(&key).await?;
        Ok(())
    }
}
