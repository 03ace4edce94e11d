//! Domain model for project lifecycle management.

mod error;
mod ids;
mod notification;
mod project;
mod request;

pub use error::{ParseProjectStatusError, ProjectDomainError};
pub use ids::{NotificationId, ProjectId, RequestId};
pub use notification::Notification;
pub use project::{NewProject, Project, ProjectData, ProjectStatus};
pub use request::ProjectRequest;
