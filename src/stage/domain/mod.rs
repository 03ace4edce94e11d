//! Domain model for project stages.

mod error;
mod ids;
mod stage;

pub use error::{ParseStageStatusError, StageDomainError};
pub use ids::{SelectionEpoch, StageId};
pub use stage::{NewStage, Stage, StageStatus};
