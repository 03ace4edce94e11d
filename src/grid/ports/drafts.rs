//! Port for the client-side draft cache.

use crate::grid::domain::{DraftKey, GridDraft};
use crate::remote::ServiceResult;
use async_trait::async_trait;

/// Draft persistence contract.
///
/// An injectable collaborator so tests substitute an in-memory fake;
/// production implementations may sit on browser storage or disk.
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// Returns the draft stashed under a key, if any.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError`] on storage failure.
    async fn load(&self, key: &DraftKey) -> ServiceResult<Option<GridDraft>>;

    /// Stashes a draft under a key, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError`] on storage failure.
    async fn save(&self, key: &DraftKey, draft: &GridDraft) -> ServiceResult<()>;

    /// Removes the draft stashed under a key, if any.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError`] on storage failure.
    async fn clear(&self, key: &DraftKey) -> ServiceResult<()>;
}
