//! Row state machine tests.

use crate::directory::domain::{RoleId, UserId};
use crate::grid::domain::{AssignmentEntry, AssignmentSet, RowState};
use rstest::rstest;

fn set(user: u64, role: u64) -> AssignmentSet {
    AssignmentSet::from_entries([AssignmentEntry {
        user_id: UserId::new(user),
        role_id: RoleId::new(role),
    }])
}

#[rstest]
fn only_loaded_rows_are_editable() {
    assert!(RowState::Loaded(AssignmentSet::new()).is_editable());
    assert!(!RowState::Unloaded.is_editable());
    assert!(!RowState::Loading.is_editable());
    assert!(!RowState::LoadFailed.is_editable());
    assert!(
        !RowState::Saving {
            known_good: AssignmentSet::new(),
            submitted: AssignmentSet::new(),
        }
        .is_editable()
    );
}

#[rstest]
fn busy_covers_both_in_flight_states() {
    assert!(RowState::Loading.is_busy());
    assert!(
        RowState::Saving {
            known_good: AssignmentSet::new(),
            submitted: AssignmentSet::new(),
        }
        .is_busy()
    );
    assert!(!RowState::Unloaded.is_busy());
    assert!(!RowState::LoadFailed.is_busy());
}

#[rstest]
fn saving_rows_render_the_submitted_set() {
    let state = RowState::Saving {
        known_good: set(42, 1),
        submitted: set(42, 2),
    };

    assert_eq!(state.displayed(), Some(&set(42, 2)));
    assert_eq!(state.known_good(), Some(&set(42, 1)));
}

#[rstest]
fn failed_rows_render_nothing() {
    assert_eq!(RowState::LoadFailed.displayed(), None);
    assert_eq!(RowState::LoadFailed.known_good(), None);
}
