//! Stage directory service: ordered stages, selection, rename, delete.

use crate::project::domain::ProjectId;
use crate::remote::ServiceError;
use crate::stage::domain::{NewStage, SelectionEpoch, Stage, StageDomainError, StageId, StageStatus};
use crate::stage::ports::StageGateway;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for stage directory operations.
#[derive(Debug, Error)]
pub enum StageDirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] StageDomainError),

    /// Gateway operation failed.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Deleting the last remaining stage is refused client-side.
    ///
    /// This is a soft guard: the server does not promise the same check.
    #[error("cannot delete the last remaining stage {0}")]
    LastStage(StageId),

    /// The stage is not present in the directory.
    #[error("unknown stage: {0}")]
    UnknownStage(StageId),

    /// A rename was committed without a pending title.
    #[error("no rename is pending for stage {0}")]
    NoPendingRename(StageId),
}

/// Result type for stage directory operations.
pub type StageDirectoryResult<T> = Result<T, StageDirectoryError>;

/// Ordered set of a project's stages plus the active selection.
///
/// Renames use a pending/committed split: the pending title is rendered
/// immediately, but the directory's stage list only changes once the
/// server acknowledges. On failure the pending title is dropped and the
/// committed title shows again.
pub struct StageDirectory<G: StageGateway> {
    gateway: Arc<G>,
    project_id: ProjectId,
    stages: Vec<Stage>,
    selected: Option<StageId>,
    epoch: SelectionEpoch,
    pending_rename: Option<(StageId, String)>,
}

impl<G: StageGateway> StageDirectory<G> {
    /// Creates an empty directory for a project.
    #[must_use]
    pub const fn new(gateway: Arc<G>, project_id: ProjectId) -> Self {
        Self {
            gateway,
            project_id,
            stages: Vec::new(),
            selected: None,
            epoch: SelectionEpoch::initial(),
            pending_rename: None,
        }
    }

    /// Returns the stages in directory order.
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Returns the selected stage, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<StageId> {
        self.selected
    }

    /// Returns the current selection epoch.
    #[must_use]
    pub const fn epoch(&self) -> SelectionEpoch {
        self.epoch
    }

    /// Returns the title to render for a stage: pending if a rename is in
    /// flight, committed otherwise.
    #[must_use]
    pub fn display_title(&self, stage_id: StageId) -> Option<&str> {
        if let Some((pending_id, title)) = &self.pending_rename
            && *pending_id == stage_id
        {
            return Some(title);
        }
        self.find(stage_id).map(Stage::title)
    }

    /// Refetches the stage list.
    ///
    /// Keeps the current selection when the stage still exists; otherwise
    /// falls back to the first stage (or none) and mints a new epoch.
    ///
    /// # Errors
    ///
    /// Returns [`StageDirectoryError::Service`] when the fetch fails; the
    /// cached list keeps its previous contents.
    pub async fn refresh(&mut self) -> StageDirectoryResult<()> {
        self.stages = self.gateway.list_stages(self.project_id).await?;
        let still_selected = self
            .selected
            .is_some_and(|id| self.stages.iter().any(|stage| stage.id() == id));
        if !still_selected {
            self.selected = self.stages.first().map(Stage::id);
            self.epoch = self.epoch.next();
            debug!(epoch = self.epoch.value(), "stage selection reset on refresh");
        }
        Ok(())
    }

    /// Selects a stage, minting a new epoch when the selection changes.
    ///
    /// # Errors
    ///
    /// Returns [`StageDirectoryError::UnknownStage`] when the stage is not
    /// in the directory.
    pub fn select(&mut self, stage_id: StageId) -> StageDirectoryResult<SelectionEpoch> {
        if self.find(stage_id).is_none() {
            return Err(StageDirectoryError::UnknownStage(stage_id));
        }
        if self.selected != Some(stage_id) {
            self.selected = Some(stage_id);
            self.epoch = self.epoch.next();
            debug!(stage = %stage_id, epoch = self.epoch.value(), "stage selected");
        }
        Ok(self.epoch)
    }

    /// Creates a stage at the end of the directory. Admin-only.
    ///
    /// The sequence index defaults to the current stage count
    /// (append-at-end policy; no reordering support). The new stage
    /// becomes the selection when none was active.
    ///
    /// # Errors
    ///
    /// Returns [`StageDirectoryError::Domain`] when the title is empty or
    /// [`StageDirectoryError::Service`] when creation fails.
    pub async fn create(
        &mut self,
        title: impl Into<String>,
        status: StageStatus,
        deadline: Option<NaiveDate>,
    ) -> StageDirectoryResult<StageId> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(StageDomainError::EmptyTitle.into());
        }
        let sequence = u32::try_from(self.stages.len()).unwrap_or(u32::MAX);
        let spec = NewStage {
            project_id: self.project_id,
            title,
            status,
            sequence,
            deadline,
        };
        let stage = self.gateway.create_stage(&spec).await?;
        let stage_id = stage.id();
        self.stages.push(stage);
        if self.selected.is_none() {
            self.selected = Some(stage_id);
            self.epoch = self.epoch.next();
        }
        Ok(stage_id)
    }

    /// Stores a pending rename for immediate rendering.
    ///
    /// # Errors
    ///
    /// Returns [`StageDirectoryError::UnknownStage`] when the stage is not
    /// in the directory or [`StageDirectoryError::Domain`] when the new
    /// title is empty.
    pub fn begin_rename(
        &mut self,
        stage_id: StageId,
        title: impl Into<String>,
    ) -> StageDirectoryResult<()> {
        if self.find(stage_id).is_none() {
            return Err(StageDirectoryError::UnknownStage(stage_id));
        }
        let title = title.into();
        if title.trim().is_empty() {
            return Err(StageDomainError::EmptyTitle.into());
        }
        self.pending_rename = Some((stage_id, title));
        Ok(())
    }

    /// Submits the pending rename and reconciles to the server's answer.
    ///
    /// On failure the pending title is dropped so the committed title
    /// shows again; the stage list never holds an unacknowledged value.
    ///
    /// # Errors
    ///
    /// Returns [`StageDirectoryError::NoPendingRename`] when no rename is
    /// pending for the stage, or the gateway error on rejection.
    pub async fn commit_rename(&mut self, stage_id: StageId) -> StageDirectoryResult<()> {
        let Some((pending_id, title)) = self.pending_rename.take() else {
            return Err(StageDirectoryError::NoPendingRename(stage_id));
        };
        if pending_id != stage_id {
            self.pending_rename = Some((pending_id, title));
            return Err(StageDirectoryError::NoPendingRename(stage_id));
        }
        let renamed = self.gateway.rename_stage(stage_id, &title).await?;
        if let Some(stage) = self.stages.iter_mut().find(|stage| stage.id() == stage_id) {
            *stage = renamed;
        }
        Ok(())
    }

    /// Renames a stage in one step: begin, then commit.
    ///
    /// # Errors
    ///
    /// As [`Self::begin_rename`] and [`Self::commit_rename`].
    pub async fn rename(
        &mut self,
        stage_id: StageId,
        title: impl Into<String>,
    ) -> StageDirectoryResult<()> {
        self.begin_rename(stage_id, title)?;
        self.commit_rename(stage_id).await
    }

    /// Deletes a stage. Admin-only.
    ///
    /// Refuses to delete the last remaining stage. When the deleted stage
    /// was selected, selection falls back to the first remaining stage or
    /// to none, minting a new epoch either way.
    ///
    /// # Errors
    ///
    /// Returns [`StageDirectoryError::LastStage`] for the final stage,
    /// [`StageDirectoryError::UnknownStage`] when absent, or the gateway
    /// error on rejection.
    pub async fn delete(&mut self, stage_id: StageId) -> StageDirectoryResult<()> {
        if self.find(stage_id).is_none() {
            return Err(StageDirectoryError::UnknownStage(stage_id));
        }
        if self.stages.len() <= 1 {
            return Err(StageDirectoryError::LastStage(stage_id));
        }
        self.gateway.delete_stage(stage_id).await?;
        self.stages.retain(|stage| stage.id() != stage_id);
        if self.selected == Some(stage_id) {
            self.selected = self.stages.first().map(Stage::id);
            self.epoch = self.epoch.next();
            debug!(epoch = self.epoch.value(), "selection moved after stage delete");
        }
        Ok(())
    }

    fn find(&self, stage_id: StageId) -> Option<&Stage> {
        self.stages.iter().find(|stage| stage.id() == stage_id)
    }
}
