//! Port contracts for assignment persistence and the draft cache.

pub mod assignments;
pub mod drafts;

pub use assignments::AssignmentGateway;
#[cfg(test)]
pub use assignments::MockAssignmentGateway;
pub use drafts::DraftStore;
