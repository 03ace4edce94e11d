//! In-memory gateways for project lifecycle tests.

mod notifications;
mod projects;

pub use notifications::InMemoryNotificationGateway;
pub use projects::InMemoryProjectGateway;
