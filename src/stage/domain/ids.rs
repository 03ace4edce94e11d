//! Identifier types for the stage domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to a stage by the external stage service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StageId(u64);

impl StageId {
    /// Wraps a stage identifier received from the stage service.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic counter identifying one stage selection.
///
/// Every selection change mints a new epoch. Task and assignment fetches
/// are tagged with the epoch in effect when they were issued; a response
/// carrying a stale epoch is discarded instead of rendered.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SelectionEpoch(u64);

impl SelectionEpoch {
    /// Returns the initial epoch.
    #[must_use]
    pub const fn initial() -> Self {
        Self(0)
    }

    /// Returns the epoch following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the underlying counter value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SelectionEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
