//! Stage entity and status enum.

use super::{ParseStageStatusError, StageId};
use crate::project::domain::ProjectId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stage progress status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    /// Work has not started.
    Planned,
    /// Work is under way.
    InProgress,
    /// Work is finished.
    Completed,
}

impl StageStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for StageStatus {
    type Error = ParseStageStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "planned" => Ok(Self::Planned),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseStageStatusError(value.to_owned())),
        }
    }
}

/// A named phase within a project, owning an ordered set of tasks.
///
/// Sequence indices follow an append-at-end policy and are not enforced
/// unique; ordering within the directory is list order as reported by the
/// service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    id: StageId,
    project_id: ProjectId,
    title: String,
    status: StageStatus,
    sequence: u32,
    deadline: Option<NaiveDate>,
}

/// Fields for a stage creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStage {
    /// Owning project.
    pub project_id: ProjectId,
    /// Stage title.
    pub title: String,
    /// Initial status, defaulting to planned.
    pub status: StageStatus,
    /// Append-at-end sequence index.
    pub sequence: u32,
    /// Optional stage deadline (date only).
    pub deadline: Option<NaiveDate>,
}

impl Stage {
    /// Creates a stage from service data.
    #[must_use]
    pub const fn new(
        id: StageId,
        project_id: ProjectId,
        title: String,
        status: StageStatus,
        sequence: u32,
        deadline: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            project_id,
            title,
            status,
            sequence,
            deadline,
        }
    }

    /// Returns the stage identifier.
    #[must_use]
    pub const fn id(&self) -> StageId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the stage title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the stage status.
    #[must_use]
    pub const fn status(&self) -> StageStatus {
        self.status
    }

    /// Returns the sequence index.
    #[must_use]
    pub const fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Returns the stage deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns a copy with the given title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
