//! Deadline sweep: notification fan-out for imminent due dates.

use crate::directory::domain::UserId;
use crate::project::ports::NotificationGateway;
use crate::remote::ServiceResult;
use crate::task::domain::{DeadlineStatus, Task};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

/// Returns the incomplete tasks whose deadlines fall within `window_days`
/// of `today` (today included, overdue excluded).
#[must_use]
pub fn due_soon(tasks: &[Task], today: NaiveDate, window_days: i64) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| !task.is_completed())
        .filter(|task| {
            task.deadline()
                .is_some_and(|date| (0..=window_days).contains(&(date - today).num_days()))
        })
        .collect()
}

/// Periodic sweep that notifies project members of imminent deadlines.
#[derive(Clone)]
pub struct DeadlineSweep<N, C>
where
    N: NotificationGateway,
    C: Clock + Send + Sync,
{
    notifications: Arc<N>,
    clock: Arc<C>,
    window_days: i64,
}

impl<N, C> DeadlineSweep<N, C>
where
    N: NotificationGateway,
    C: Clock + Send + Sync,
{
    /// Creates a sweep with the given look-ahead window.
    #[must_use]
    pub const fn new(notifications: Arc<N>, clock: Arc<C>, window_days: i64) -> Self {
        Self {
            notifications,
            clock,
            window_days,
        }
    }

    /// Notifies each recipient about every task due within the window.
    ///
    /// Returns the number of notifications pushed.
    ///
    /// # Errors
    ///
    /// Returns the first gateway error; notifications already pushed are
    /// not retracted.
    pub async fn run(&self, tasks: &[Task], recipients: &[UserId]) -> ServiceResult<usize> {
        let today = self.clock.utc().date_naive();
        let mut pushed = 0;
        for task in due_soon(tasks, today, self.window_days) {
            let label = DeadlineStatus::classify(task.deadline(), today).label();
            let message = format!("Task '{}' is due: {label}", task.title());
            for recipient in recipients {
                self.notifications.push(*recipient, &message).await?;
                pushed += 1;
            }
        }
        debug!(pushed, "deadline sweep complete");
        Ok(pushed)
    }
}
