//! Domain model for the assignment grid.

mod assignment;
mod draft;
mod error;
mod row;

pub use assignment::{AssignmentEntry, AssignmentSet};
pub use draft::{DraftKey, GridDraft};
pub use error::{GridError, GridResult};
pub use row::RowState;
