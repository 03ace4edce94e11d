//! In-memory gateway for stage directory tests.

mod stages;

pub use stages::InMemoryStageGateway;
