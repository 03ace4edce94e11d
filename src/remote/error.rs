//! Error taxonomy for calls to external services.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type for remote gateway operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure modes shared by every external-service contract.
///
/// All variants except [`ServiceError::Unauthorized`] are locally
/// recoverable: the affected row or cell reverts to its last known-good
/// state and the user may retry. An expired credential propagates to the
/// session boundary instead.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// A required field was missing or malformed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The entity vanished concurrently; callers should refresh their list.
    #[error("not found: {0}")]
    NotFound(String),

    /// A business rule was violated; no state changed.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The bearer credential is missing or expired.
    #[error("credential missing or expired")]
    Unauthorized,

    /// The request did not resolve within the configured limit.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(Arc<dyn std::error::Error + Send + Sync>),
}

impl ServiceError {
    /// Builds a validation error from a field-level message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Builds a not-found error from an entity descriptor.
    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound(entity.into())
    }

    /// Builds a conflict error from a business-rule message.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Wraps a transport error.
    pub fn network(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Network(Arc::new(err))
    }

    /// Returns whether the caller may retry after reverting local state.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Unauthorized)
    }
}
