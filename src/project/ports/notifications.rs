//! Gateway port for the external notification service.

use crate::directory::domain::UserId;
use crate::project::domain::{Notification, NotificationId};
use crate::remote::ServiceResult;
use async_trait::async_trait;

/// Flat list-and-mark-read notification contract.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Returns the notifications addressed to a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError`] on transport or credential
    /// failure.
    async fn list_notifications(&self, user_id: UserId) -> ServiceResult<Vec<Notification>>;

    /// Pushes a notification to a user.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::NotFound`] when the user
    /// does not exist.
    async fn push(&self, user_id: UserId, message: &str) -> ServiceResult<Notification>;

    /// Marks one notification as read.
    ///
    /// # Errors
    ///
    /// Returns [`crate::remote::ServiceError::NotFound`] when the
    /// notification does not exist.
    async fn mark_read(&self, id: NotificationId) -> ServiceResult<()>;
}
