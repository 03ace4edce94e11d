//! User-submitted project requests awaiting admin review.

use super::{ProjectDomainError, RequestId};
use crate::directory::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A regular user's request for a new project.
///
/// Submitting the request creates a `draft` project server-side; an admin
/// then approves it into an active project or rejects (deletes) it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRequest {
    id: RequestId,
    title: String,
    description: Option<String>,
    submitted_by: UserId,
    submitted_at: DateTime<Utc>,
}

impl ProjectRequest {
    /// Creates a validated project request.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyTitle`] when the title is empty
    /// after trimming.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        submitted_by: UserId,
        clock: &impl Clock,
    ) -> Result<Self, ProjectDomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ProjectDomainError::EmptyTitle);
        }
        Ok(Self {
            id: RequestId::new(),
            title,
            description,
            submitted_by,
            submitted_at: clock.utc(),
        })
    }

    /// Returns the client-generated request identifier.
    #[must_use]
    pub const fn id(&self) -> RequestId {
        self.id
    }

    /// Returns the requested project title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the requested project description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the submitting user.
    #[must_use]
    pub const fn submitted_by(&self) -> UserId {
        self.submitted_by
    }

    /// Returns the submission timestamp.
    #[must_use]
    pub const fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}
