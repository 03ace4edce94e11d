//! Flat notification entries with a list-and-mark-read contract.

use super::NotificationId;
use crate::directory::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A notification addressed to one user.
///
/// Delivery mechanics are the notification service's concern; this core
/// only lists notifications and marks them read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    id: NotificationId,
    user_id: UserId,
    message: String,
    created_at: DateTime<Utc>,
    read: bool,
}

impl Notification {
    /// Creates a notification from service data.
    #[must_use]
    pub const fn new(
        id: NotificationId,
        user_id: UserId,
        message: String,
        created_at: DateTime<Utc>,
        read: bool,
    ) -> Self {
        Self {
            id,
            user_id,
            message,
            created_at,
            read,
        }
    }

    /// Returns the notification identifier.
    #[must_use]
    pub const fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the addressed user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the notification text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether the user has read the notification.
    #[must_use]
    pub const fn is_read(&self) -> bool {
        self.read
    }

    /// Marks the notification as read.
    pub const fn mark_read(&mut self) {
        self.read = true;
    }
}
