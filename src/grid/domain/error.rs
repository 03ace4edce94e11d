//! Error types for assignment grid operations.

use crate::directory::domain::UserId;
use crate::remote::ServiceError;
use crate::task::domain::TaskId;
use thiserror::Error;

/// Errors surfaced by grid operations.
#[derive(Debug, Error)]
pub enum GridError {
    /// Gateway operation failed.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The row has not been successfully loaded; edits are refused.
    #[error("row for task {0} is not loaded")]
    RowNotLoaded(TaskId),

    /// A save for this row is already in flight.
    #[error("a save for task {0} is already in flight")]
    SaveInFlight(TaskId),

    /// No load or save is pending for this row.
    #[error("no request is pending for task {0}")]
    NothingPending(TaskId),

    /// The role code is not in the catalog snapshot.
    #[error("unknown role code: '{0}'")]
    UnknownRole(String),

    /// The user is not a member of the project.
    #[error("user {0} is not a project member")]
    UnknownMember(UserId),

    /// The task has no row in the grid.
    #[error("unknown task: {0}")]
    UnknownTask(TaskId),

    /// The grid is not bound to a stage view.
    #[error("grid is not bound to a stage")]
    Unbound,
}

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;
