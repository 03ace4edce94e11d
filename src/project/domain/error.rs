//! Error types for project domain validation and parsing.

use super::ProjectStatus;
use thiserror::Error;

/// Errors returned while constructing or mutating project domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project or request title is empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The requested status transition is not part of the lifecycle.
    #[error("invalid project transition: {from:?} -> {to:?}")]
    InvalidTransition {
        /// Status the project currently holds.
        from: ProjectStatus,
        /// Status the caller attempted to reach.
        to: ProjectStatus,
    },

    /// The project is archived and no longer accepts mutation.
    #[error("project is archived")]
    Archived,
}

/// Error returned while parsing project statuses from the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);
