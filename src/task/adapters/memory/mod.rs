//! In-memory gateway for task registry tests.

mod tasks;

pub use tasks::InMemoryTaskGateway;
