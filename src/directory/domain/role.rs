//! Role catalog entries and their identifier types.

use super::DirectoryDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to a role by the external role service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoleId(u64);

impl RoleId {
    /// Wraps a role identifier received from the role service.
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

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated role code, e.g. `R`, `A`, `C`, `I`, or a custom label.
///
/// Codes are unique within the catalog; uniqueness is enforced by the
/// external role service and guarded client-side before submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleCode(String);

impl RoleCode {
    /// Creates a validated role code.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyRoleCode`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DirectoryDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DirectoryDomainError::EmptyRoleCode);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the code as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RoleCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RoleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Entry in the global role catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    id: RoleId,
    code: RoleCode,
    is_custom: bool,
}

impl Role {
    /// Creates a catalog entry from service data.
    #[must_use]
    pub const fn new(id: RoleId, code: RoleCode, is_custom: bool) -> Self {
        Self {
            id,
            code,
            is_custom,
        }
    }

    /// Returns the role identifier.
    #[must_use]
    pub const fn id(&self) -> RoleId {
        self.id
    }

    /// Returns the role code.
    #[must_use]
    pub const fn code(&self) -> &RoleCode {
        &self.code
    }

    /// Returns whether the role was defined by an administrator rather
    /// than shipped with the standard RACI set.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        self.is_custom
    }
}
