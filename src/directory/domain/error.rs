//! Error types for directory domain validation.

use thiserror::Error;

/// Errors returned while constructing directory domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryDomainError {
    /// The role code is empty after trimming.
    #[error("role code must not be empty")]
    EmptyRoleCode,

    /// The member display name is empty after trimming.
    #[error("member display name must not be empty")]
    EmptyDisplayName,
}
