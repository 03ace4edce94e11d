//! In-memory gateways for assignment grid tests.

mod assignments;
mod drafts;

pub use assignments::InMemoryAssignmentGateway;
pub use drafts::InMemoryDraftStore;
