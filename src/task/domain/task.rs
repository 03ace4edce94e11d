//! Task entity and priority enum.

use super::{ParsePriorityError, TaskId};
use crate::stage::domain::StageId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task priority. Carried for display only; nothing here branches on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Default priority.
    #[default]
    Low,
    /// Elevated priority.
    Medium,
    /// Highest priority.
    High,
}

impl Priority {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// The unit of work to which RACI roles are assigned.
///
/// Owned by exactly one stage. Deleting a task removes its assignment row
/// from the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    stage_id: StageId,
    title: String,
    description: Option<String>,
    priority: Priority,
    completed: bool,
    deadline: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a task received from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskData {
    /// Server-assigned identifier.
    pub id: TaskId,
    /// Owning stage.
    pub stage_id: StageId,
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Task priority.
    pub priority: Priority,
    /// Completion flag.
    pub completed: bool,
    /// Optional deadline (date only).
    pub deadline: Option<NaiveDate>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields for a task creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// Owning stage.
    pub stage_id: StageId,
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Initial priority, defaulting to low.
    pub priority: Priority,
    /// Optional deadline (date only, no time component).
    pub deadline: Option<NaiveDate>,
}

impl Task {
    /// Reconstructs a task from service data.
    #[must_use]
    pub fn from_data(data: TaskData) -> Self {
        Self {
            id: data.id,
            stage_id: data.stage_id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            completed: data.completed,
            deadline: data.deadline,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning stage.
    #[must_use]
    pub const fn stage_id(&self) -> StageId {
        self.stage_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the task deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns a copy with the given title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Returns a copy with the given deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Option<NaiveDate>) -> Self {
        self.deadline = deadline;
        self
    }
}
