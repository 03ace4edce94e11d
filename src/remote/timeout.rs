//! Timeout bound for in-flight remote requests.

use super::{ServiceError, ServiceResult};
use std::future::Future;
use std::time::Duration;

/// Drives a gateway call to completion or fails it after `limit`.
///
/// A request that never resolves would otherwise leave its row in
/// `Loading`/`Saving` indefinitely; the elapsed timer converts it into a
/// [`ServiceError::Timeout`] so the caller reverts as on any other failure.
///
/// # Errors
///
/// Returns [`ServiceError::Timeout`] when the future does not resolve
/// within `limit`, or the future's own error otherwise.
pub async fn with_timeout<T>(
    limit: Duration,
    request: impl Future<Output = ServiceResult<T>>,
) -> ServiceResult<T> {
    match tokio::time::timeout(limit, request).await {
        Ok(result) => result,
        Err(_elapsed) => Err(ServiceError::Timeout(limit)),
    }
}
