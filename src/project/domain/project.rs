//! Project aggregate root and lifecycle states.

use super::{ParseProjectStatusError, ProjectDomainError, ProjectId};
use crate::directory::domain::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Project lifecycle status.
///
/// `Draft -> Approved` on admin approval, `Approved -> Archived` one-way.
/// Rejection deletes the draft outright and has no status of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Submitted by a user, awaiting admin review.
    Draft,
    /// Approved and open for stage/task/member mutation.
    Approved,
    /// Closed for mutation; still viewable.
    Archived,
}

impl ProjectStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Approved => "approved",
            Self::Archived => "archived",
        }
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "draft" => Ok(Self::Draft),
            "approved" => Ok(Self::Approved),
            "archived" => Ok(Self::Archived),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}

/// Project aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: Option<String>,
    deadline: Option<NaiveDate>,
    status: ProjectStatus,
    created_at: DateTime<Utc>,
    created_by: UserId,
}

/// Parameter object for reconstructing a project received from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectData {
    /// Server-assigned identifier.
    pub id: ProjectId,
    /// Project title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional project deadline (date only).
    pub deadline: Option<NaiveDate>,
    /// Current lifecycle status.
    pub status: ProjectStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// User who created or requested the project.
    pub created_by: UserId,
}

/// Fields for a project an administrator creates directly as approved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    /// Project title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional project deadline (date only).
    pub deadline: Option<NaiveDate>,
    /// Creating administrator.
    pub created_by: UserId,
}

impl Project {
    /// Reconstructs a project from service data.
    #[must_use]
    pub fn from_data(data: ProjectData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            deadline: data.deadline,
            status: data.status,
            created_at: data.created_at,
            created_by: data.created_by,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the project description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the project deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the creating user.
    #[must_use]
    pub const fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Returns whether stages, tasks, and members may still be mutated.
    #[must_use]
    pub const fn is_mutable(&self) -> bool {
        matches!(self.status, ProjectStatus::Approved)
    }

    /// Returns whether the project is archived.
    #[must_use]
    pub const fn is_archived(&self) -> bool {
        matches!(self.status, ProjectStatus::Archived)
    }

    /// Approves a draft project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidTransition`] unless the
    /// project is currently a draft.
    pub const fn approve(&mut self) -> Result<(), ProjectDomainError> {
        match self.status {
            ProjectStatus::Draft => {
                self.status = ProjectStatus::Approved;
                Ok(())
            }
            from => Err(ProjectDomainError::InvalidTransition {
                from,
                to: ProjectStatus::Approved,
            }),
        }
    }

    /// Archives an approved project. One-way.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidTransition`] unless the
    /// project is currently approved.
    pub const fn archive(&mut self) -> Result<(), ProjectDomainError> {
        match self.status {
            ProjectStatus::Approved => {
                self.status = ProjectStatus::Archived;
                Ok(())
            }
            from => Err(ProjectDomainError::InvalidTransition {
                from,
                to: ProjectStatus::Archived,
            }),
        }
    }
}
