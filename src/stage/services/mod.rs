//! Orchestration services for the stage directory.

mod directory;

pub use directory::{StageDirectory, StageDirectoryError, StageDirectoryResult};
