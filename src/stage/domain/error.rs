//! Error types for stage domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing stage domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StageDomainError {
    /// The stage title is empty after trimming.
    #[error("stage title must not be empty")]
    EmptyTitle,
}

/// Error returned while parsing stage statuses from the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown stage status: {0}")]
pub struct ParseStageStatusError(pub String);
