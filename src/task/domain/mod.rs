//! Domain model for tasks and deadlines.

mod deadline;
mod error;
mod ids;
mod task;

pub use deadline::{DeadlineStatus, UrgencyTag};
pub use error::{ParsePriorityError, TaskDomainError};
pub use ids::TaskId;
pub use task::{NewTask, Priority, Task, TaskData};
