//! Remote-call plumbing shared by every gateway port.
//!
//! External services (auth, persistence, membership, role catalog) are
//! reached through async port traits. This module defines the error
//! taxonomy those ports surface and the timeout wrapper that bounds each
//! in-flight request.

mod error;
mod timeout;

pub use error::{ServiceError, ServiceResult};
pub use timeout::with_timeout;
