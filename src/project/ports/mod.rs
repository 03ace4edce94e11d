//! Port contracts for the external project and notification services.

pub mod notifications;
pub mod projects;

pub use notifications::NotificationGateway;
pub use projects::ProjectGateway;
