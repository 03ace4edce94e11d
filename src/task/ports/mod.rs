//! Port contracts for the external task service.

pub mod tasks;

pub use tasks::TaskGateway;
