//! In-memory notification gateway for tests.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, RwLock};

use crate::directory::domain::UserId;
use crate::project::domain::{Notification, NotificationId};
use crate::project::ports::NotificationGateway;
use crate::remote::{ServiceError, ServiceResult};

/// Thread-safe in-memory notification service.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationGateway {
    state: Arc<RwLock<NotificationState>>,
}

#[derive(Debug, Default)]
struct NotificationState {
    notifications: Vec<Notification>,
    next_id: u64,
}

impl InMemoryNotificationGateway {
    /// Creates an empty notification service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> ServiceError {
    ServiceError::network(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl NotificationGateway for InMemoryNotificationGateway {
    async fn list_notifications(&self, user_id: UserId) -> ServiceResult<Vec<Notification>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut addressed: Vec<Notification> = state
            .notifications
            .iter()
            .filter(|n| n.user_id() == user_id)
            .cloned()
            .collect();
        addressed.reverse();
        Ok(addressed)
    }

    async fn push(&self, user_id: UserId, message: &str) -> ServiceResult<Notification> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.next_id += 1;
        let notification = Notification::new(
            NotificationId::new(state.next_id),
            user_id,
            message.to_owned(),
            Utc::now(),
            false,
        );
        state.notifications.push(notification.clone());
        Ok(notification)
    }

    async fn mark_read(&self, id: NotificationId) -> ServiceResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let notification = state
            .notifications
            .iter_mut()
            .find(|n| n.id() == id)
            .ok_or_else(|| ServiceError::not_found(format!("notification {id}")))?;
        notification.mark_read();
        Ok(())
    }
}
