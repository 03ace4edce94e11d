//! Port contracts for the external stage service.

pub mod stages;

pub use stages::StageGateway;
