//! Matrix board orchestrator: stage selection, task rows, and the grid.

use crate::directory::domain::{Member, Role, RoleCode, UserId};
use crate::directory::ports::{MembershipGateway, RoleCatalogGateway};
use crate::directory::services::{MembershipRoster, RoleCatalog, RoleCatalogError};
use crate::grid::domain::{DraftKey, GridError, GridResult};
use crate::grid::ports::{AssignmentGateway, DraftStore};
use crate::project::domain::ProjectId;
use crate::remote::{ServiceError, ServiceResult};
use crate::stage::domain::{SelectionEpoch, StageId, StageStatus};
use crate::stage::ports::StageGateway;
use crate::stage::services::{StageDirectory, StageDirectoryError};
use crate::task::domain::{Priority, Task, TaskId};
use crate::task::ports::TaskGateway;
use crate::task::services::{TaskRegistry, TaskRegistryError};
use chrono::NaiveDate;
use mockable::Clock;
use thiserror::Error;
use tracing::warn;

use super::AssignmentGrid;

/// Errors surfaced by board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Stage directory operation failed.
    #[error(transparent)]
    Stage(#[from] StageDirectoryError),

    /// Task registry operation failed.
    #[error(transparent)]
    Task(#[from] TaskRegistryError),

    /// Grid operation failed.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Role catalog operation failed.
    #[error(transparent)]
    Catalog(#[from] RoleCatalogError),

    /// Gateway operation failed outside any sub-service.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// One project's matrix view: stages, the selected stage's tasks, and the
/// assignment grid, kept consistent across selection changes.
///
/// Task fetches are tagged with the selection epoch in effect when they
/// were issued. A fetch that lands after the selection moved on is
/// discarded instead of overwriting the newer view.
pub struct MatrixBoard<SG, TG, AG, MG, RG, D, C>
where
    SG: StageGateway,
    TG: TaskGateway,
    AG: AssignmentGateway,
    MG: MembershipGateway,
    RG: RoleCatalogGateway,
    D: DraftStore,
    C: Clock + Send + Sync,
{
    project_id: ProjectId,
    stages: StageDirectory<SG>,
    registry: TaskRegistry<TG>,
    grid: AssignmentGrid<AG, D, C>,
    roster: MembershipRoster<MG>,
    catalog: RoleCatalog<RG>,
}

impl<SG, TG, AG, MG, RG, D, C> MatrixBoard<SG, TG, AG, MG, RG, D, C>
where
    SG: StageGateway,
    TG: TaskGateway,
    AG: AssignmentGateway,
    MG: MembershipGateway,
    RG: RoleCatalogGateway,
    D: DraftStore,
    C: Clock + Send + Sync,
{
    /// Assembles a board from its collaborating services.
    #[must_use]
    pub const fn new(
        project_id: ProjectId,
        stages: StageDirectory<SG>,
        registry: TaskRegistry<TG>,
        grid: AssignmentGrid<AG, D, C>,
        roster: MembershipRoster<MG>,
        catalog: RoleCatalog<RG>,
    ) -> Self {
        Self {
            project_id,
            stages,
            registry,
            grid,
            roster,
            catalog,
        }
    }

    /// Returns the stage directory.
    #[must_use]
    pub const fn stages(&self) -> &StageDirectory<SG> {
        &self.stages
    }

    /// Returns the task registry.
    #[must_use]
    pub const fn registry(&self) -> &TaskRegistry<TG> {
        &self.registry
    }

    /// Returns the assignment grid.
    #[must_use]
    pub const fn grid(&self) -> &AssignmentGrid<AG, D, C> {
        &self.grid
    }

    /// Returns the assignment grid for direct row operations.
    pub const fn grid_mut(&mut self) -> &mut AssignmentGrid<AG, D, C> {
        &mut self.grid
    }

    /// Returns the membership roster.
    #[must_use]
    pub const fn roster(&self) -> &MembershipRoster<MG> {
        &self.roster
    }

    /// Returns the role catalog.
    #[must_use]
    pub const fn catalog(&self) -> &RoleCatalog<RG> {
        &self.catalog
    }

    /// Returns the current selection epoch.
    #[must_use]
    pub const fn selection_epoch(&self) -> SelectionEpoch {
        self.stages.epoch()
    }

    /// Loads the board: role catalog, roster, stages, and the first
    /// stage's tasks.
    ///
    /// # Errors
    ///
    /// Returns the first failing sub-service error.
    pub async fn open(&mut self) -> BoardResult<()> {
        self.catalog.ensure_loaded().await?;
        self.roster.refresh().await?;
        self.stages.refresh().await?;
        if let Some(stage_id) = self.stages.selected() {
            let epoch = self.stages.epoch();
            let result = self.registry.fetch(stage_id).await;
            self.apply_task_fetch(epoch, stage_id, result)?;
        }
        Ok(())
    }

    /// Selects a stage and adopts its task list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Stage`] for an unknown stage, or
    /// [`BoardError::Service`] when the task fetch fails.
    pub async fn select_stage(&mut self, stage_id: StageId) -> BoardResult<SelectionEpoch> {
        let epoch = self.stages.select(stage_id)?;
        let result = self.registry.fetch(stage_id).await;
        self.apply_task_fetch(epoch, stage_id, result)?;
        Ok(epoch)
    }

    /// Adopts a task fetch tagged with the epoch it was issued under.
    ///
    /// Returns whether the fetch was adopted: a fetch from a superseded
    /// epoch is logged and dropped, leaving the registry and grid on the
    /// newer selection.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Service`] when a still-current fetch failed.
    pub fn apply_task_fetch(
        &mut self,
        epoch: SelectionEpoch,
        stage_id: StageId,
        result: ServiceResult<Vec<Task>>,
    ) -> BoardResult<bool> {
        if epoch != self.stages.epoch() {
            warn!(
                issued = epoch.value(),
                current = self.stages.epoch().value(),
                stage = %stage_id,
                "task fetch from superseded selection discarded"
            );
            return Ok(false);
        }
        let tasks = result?;
        self.registry.adopt(stage_id, tasks);
        self.rebind(stage_id);
        Ok(true)
    }

    /// Creates a stage and, when it became the selection, loads its tasks.
    ///
    /// # Errors
    ///
    /// As [`StageDirectory::create`] plus any follow-up task fetch error.
    pub async fn create_stage(
        &mut self,
        title: impl Into<String>,
        status: StageStatus,
        deadline: Option<NaiveDate>,
    ) -> BoardResult<StageId> {
        let before = self.stages.epoch();
        let stage_id = self.stages.create(title, status, deadline).await?;
        if self.stages.epoch() != before {
            let epoch = self.stages.epoch();
            let result = self.registry.fetch(stage_id).await;
            self.apply_task_fetch(epoch, stage_id, result)?;
        }
        Ok(stage_id)
    }

    /// Renames a stage through the pending/committed split.
    ///
    /// # Errors
    ///
    /// As [`StageDirectory::rename`].
    pub async fn rename_stage(
        &mut self,
        stage_id: StageId,
        title: impl Into<String>,
    ) -> BoardResult<()> {
        self.stages.rename(stage_id, title).await?;
        Ok(())
    }

    /// Deletes a stage and, when the selection moved, loads the fallback
    /// stage's tasks.
    ///
    /// # Errors
    ///
    /// As [`StageDirectory::delete`] plus any follow-up task fetch error.
    pub async fn delete_stage(&mut self, stage_id: StageId) -> BoardResult<()> {
        let before = self.stages.epoch();
        self.stages.delete(stage_id).await?;
        if self.stages.epoch() != before
            && let Some(selected) = self.stages.selected()
        {
            let epoch = self.stages.epoch();
            let result = self.registry.fetch(selected).await;
            self.apply_task_fetch(epoch, selected, result)?;
        }
        Ok(())
    }

    /// Creates a task in the selected stage and gives it a grid row.
    ///
    /// # Errors
    ///
    /// As [`TaskRegistry::create`].
    pub async fn create_task(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        priority: Priority,
        deadline: Option<NaiveDate>,
    ) -> BoardResult<TaskId> {
        let task_id = self
            .registry
            .create(title, description, priority, deadline)
            .await?;
        self.grid.add_row(task_id);
        Ok(task_id)
    }

    /// Renames a task.
    ///
    /// # Errors
    ///
    /// As [`TaskRegistry::rename`].
    pub async fn rename_task(
        &mut self,
        task_id: TaskId,
        title: impl Into<String>,
    ) -> BoardResult<()> {
        self.registry.rename(task_id, title).await?;
        Ok(())
    }

    /// Sets or clears a task's deadline.
    ///
    /// # Errors
    ///
    /// As [`TaskRegistry::set_deadline`].
    pub async fn set_task_deadline(
        &mut self,
        task_id: TaskId,
        deadline: Option<NaiveDate>,
    ) -> BoardResult<()> {
        self.registry.set_deadline(task_id, deadline).await?;
        Ok(())
    }

    /// Deletes a task; the server cascades the assignment delete and the
    /// grid drops the row.
    ///
    /// # Errors
    ///
    /// As [`TaskRegistry::delete`].
    pub async fn delete_task(&mut self, task_id: TaskId) -> BoardResult<()> {
        self.registry.delete(task_id).await?;
        self.grid.remove_row(task_id);
        Ok(())
    }

    /// Adds a user to the project and gives them a grid column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Service`] when the membership call fails.
    pub async fn add_member(&mut self, user_id: UserId) -> BoardResult<()> {
        self.roster.add(user_id).await?;
        if let Some(member) = self
            .roster
            .members()
            .iter()
            .find(|member| member.user_id() == user_id)
        {
            self.grid.add_column(member.clone());
        }
        Ok(())
    }

    /// Removes a user from the project; their assignments are cascade-
    /// cleared server-side and the grid invalidates its rows.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Service`] when the membership call fails.
    pub async fn remove_member(&mut self, user_id: UserId) -> BoardResult<()> {
        self.roster.remove(user_id).await?;
        self.grid.clear_member(user_id);
        Ok(())
    }

    /// Creates a custom role and refreshes the grid's catalog snapshot.
    ///
    /// # Errors
    ///
    /// As [`RoleCatalog::add_custom`].
    pub async fn create_custom_role(&mut self, code: RoleCode) -> BoardResult<Role> {
        let role = self.catalog.add_custom(code).await?;
        self.grid.adopt_roles(self.catalog.roles().to_vec());
        Ok(role)
    }

    /// Fetches one row's assignments.
    ///
    /// # Errors
    ///
    /// As [`AssignmentGrid::load_row`].
    pub async fn load_row(&mut self, task_id: TaskId) -> GridResult<()> {
        self.grid.load_row(task_id).await
    }

    /// Sets or clears one cell.
    ///
    /// # Errors
    ///
    /// As [`AssignmentGrid::set_cell`].
    pub async fn set_cell(
        &mut self,
        task_id: TaskId,
        user_id: UserId,
        code: &str,
    ) -> GridResult<()> {
        self.grid.set_cell(task_id, user_id, code).await
    }

    /// Returns the role code rendered in a cell, if one is assigned.
    #[must_use]
    pub fn cell_code(&self, task_id: TaskId, user_id: UserId) -> Option<&str> {
        self.grid.cell_code(task_id, user_id)
    }

    fn rebind(&mut self, stage_id: StageId) {
        let key = DraftKey {
            project_id: self.project_id,
            stage_id,
        };
        self.grid.bind(
            key,
            self.registry.tasks(),
            self.roster.members().to_vec(),
            self.catalog.roles().to_vec(),
        );
    }

    /// Returns the members cached for this project.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        self.roster.members()
    }
}
