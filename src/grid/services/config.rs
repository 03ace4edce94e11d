//! Grid tunables.

use serde::Deserialize;
use std::time::Duration;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const DEFAULT_DRAFT_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// Tunables for grid remote calls and the draft cache.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Upper bound on one in-flight load or save.
    pub request_timeout: Duration,
    /// Age beyond which a stashed draft is discarded instead of restored.
    pub draft_max_age: Duration,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            draft_max_age: DEFAULT_DRAFT_MAX_AGE,
        }
    }
}
