//! Assignment set invariant tests.

use crate::directory::domain::{RoleId, UserId};
use crate::grid::domain::{AssignmentEntry, AssignmentSet};
use rstest::rstest;

fn entry(user: u64, role: u64) -> AssignmentEntry {
    AssignmentEntry {
        user_id: UserId::new(user),
        role_id: RoleId::new(role),
    }
}

#[rstest]
fn duplicate_users_collapse_to_the_first_entry() {
    let set = AssignmentSet::from_entries([entry(42, 1), entry(42, 2), entry(7, 3)]);

    assert_eq!(set.len(), 2);
    assert_eq!(set.role_for(UserId::new(42)), Some(RoleId::new(1)));
    assert_eq!(set.role_for(UserId::new(7)), Some(RoleId::new(3)));
}

#[rstest]
fn with_cell_replaces_an_existing_role() {
    let set = AssignmentSet::from_entries([entry(42, 1)]);
    let updated = set.with_cell(UserId::new(42), Some(RoleId::new(2)));

    assert_eq!(updated.role_for(UserId::new(42)), Some(RoleId::new(2)));
    // At most one role per user: the count never grows on replace.
    assert_eq!(updated.len(), 1);
    assert_eq!(set.role_for(UserId::new(42)), Some(RoleId::new(1)));
}

#[rstest]
fn with_cell_none_removes_the_entry() {
    let set = AssignmentSet::from_entries([entry(42, 1), entry(7, 3)]);
    let updated = set.with_cell(UserId::new(42), None);

    assert_eq!(updated.role_for(UserId::new(42)), None);
    assert_eq!(updated.entries(), [entry(7, 3)]);
}

#[rstest]
fn removing_an_absent_user_is_a_no_op() {
    let set = AssignmentSet::from_entries([entry(7, 3)]);
    let updated = set.with_cell(UserId::new(42), None);
    assert_eq!(updated, set);
}

#[rstest]
fn entries_are_ordered_by_user_id() {
    let set = AssignmentSet::from_entries([entry(9, 1), entry(3, 2), entry(5, 4)]);
    let users: Vec<u64> = set.entries().iter().map(|e| e.user_id.value()).collect();
    assert_eq!(users, [3, 5, 9]);
}

#[rstest]
fn clear_user_reports_presence() {
    let mut set = AssignmentSet::from_entries([entry(42, 1)]);
    assert!(set.clear_user(UserId::new(42)));
    assert!(!set.clear_user(UserId::new(42)));
    assert!(set.is_empty());
}
