//! Load/save state machine for one task's grid row.

use super::AssignmentSet;

/// State of one task's assignment set.
///
/// `Unloaded -> Loading -> Loaded | LoadFailed`, and from `Loaded`
/// through `Saving` back to `Loaded` (adopting the submitted set) or,
/// on failure, to `Loaded` with the prior known-good set. A row that
/// failed to load renders with every cell unassigned and refuses edits
/// until a load succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowState {
    /// No fetch has been issued yet.
    Unloaded,
    /// A fetch is in flight.
    Loading,
    /// The server-confirmed assignment set.
    Loaded(AssignmentSet),
    /// The fetch failed; cells render unassigned and edits are refused.
    LoadFailed,
    /// A replace submission is in flight.
    Saving {
        /// Last server-confirmed set, the revert target on failure.
        known_good: AssignmentSet,
        /// The set submitted to the server, rendered while pending.
        submitted: AssignmentSet,
    },
}

impl RowState {
    /// Returns whether a cell edit may start in this state.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Returns whether a request for this row is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self, Self::Loading | Self::Saving { .. })
    }

    /// Returns the last server-confirmed set, when one exists.
    #[must_use]
    pub const fn known_good(&self) -> Option<&AssignmentSet> {
        match self {
            Self::Loaded(set) => Some(set),
            Self::Saving { known_good, .. } => Some(known_good),
            Self::Unloaded | Self::Loading | Self::LoadFailed => None,
        }
    }

    /// Returns the set to render: the pending submission while saving,
    /// the confirmed set otherwise.
    #[must_use]
    pub const fn displayed(&self) -> Option<&AssignmentSet> {
        match self {
            Self::Loaded(set) => Some(set),
            Self::Saving { submitted, .. } => Some(submitted),
            Self::Unloaded | Self::Loading | Self::LoadFailed => None,
        }
    }
}
