//! Project membership entries with denormalized display fields.

use super::DirectoryDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User identifier from the external user directory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wraps a user identifier received from the user directory.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user's association with a project.
///
/// Display fields are denormalized copies supplied by the membership
/// service; the grid never edits them, only reads them for column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    user_id: UserId,
    full_name: String,
    username: String,
    positions: Vec<String>,
}

impl Member {
    /// Creates a membership entry from service data.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyDisplayName`] when the full
    /// name is empty after trimming.
    pub fn new(
        user_id: UserId,
        full_name: impl Into<String>,
        username: impl Into<String>,
    ) -> Result<Self, DirectoryDomainError> {
        let full_name = full_name.into();
        if full_name.trim().is_empty() {
            return Err(DirectoryDomainError::EmptyDisplayName);
        }
        Ok(Self {
            user_id,
            full_name,
            username: username.into(),
            positions: Vec::new(),
        })
    }

    /// Sets the member's position titles.
    #[must_use]
    pub fn with_positions(mut self, positions: impl IntoIterator<Item = String>) -> Self {
        self.positions = positions.into_iter().collect();
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the member's full display name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the member's login name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the member's position titles.
    #[must_use]
    pub fn positions(&self) -> &[String] {
        &self.positions
    }
}
