//! Gateway port for the external stage service.

use crate::project::domain::ProjectId;
use crate::remote::ServiceResult;
use crate::stage::domain::{NewStage, Stage, StageId};
use async_trait::async_trait;

/// Stage persistence contract.
#[async_trait]
pub trait StageGateway: Send + Sync {
    /// Returns a project's stages in directory order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::NotFound`] when the project
    /// does not exist or [`crate::remote::ServiceError::Unauthorized`]
    /// when the caller lacks project access.
    async fn list_stages(&self, project_id: ProjectId) -> ServiceResult<Vec<Stage>>;

    /// Creates a stage. Admin-only.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::Validation`] on malformed
    /// fields.
    async fn create_stage(&self, spec: &NewStage) -> ServiceResult<Stage>;

    /// Renames a stage. Admin-only.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::NotFound`] when the stage
    /// does not exist.
    async fn rename_stage(&self, stage_id: StageId, title: &str) -> ServiceResult<Stage>;

    /// Deletes a stage. Admin-only.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::NotFound`] when the stage
    /// does not exist.
    async fn delete_stage(&self, stage_id: StageId) -> ServiceResult<()>;
}
