//! Domain tests for stages and selection epochs.

use crate::project::domain::ProjectId;
use crate::stage::domain::{SelectionEpoch, Stage, StageId, StageStatus};
use rstest::rstest;

#[rstest]
fn epochs_are_strictly_increasing() {
    let first = SelectionEpoch::initial();
    let second = first.next();
    let third = second.next();
    assert!(first < second);
    assert!(second < third);
    assert_eq!(third.value(), 2);
}

#[rstest]
#[case("planned", StageStatus::Planned)]
#[case("IN_PROGRESS", StageStatus::InProgress)]
#[case(" completed ", StageStatus::Completed)]
fn status_parses_case_insensitively(#[case] raw: &str, #[case] expected: StageStatus) {
    assert_eq!(StageStatus::try_from(raw).expect("parse"), expected);
}

#[rstest]
fn unknown_status_fails_to_parse() {
    assert!(StageStatus::try_from("paused").is_err());
}

#[rstest]
fn with_title_replaces_only_the_title() {
    let stage = Stage::new(
        StageId::new(3),
        ProjectId::new(1),
        "Этап 1".to_owned(),
        StageStatus::Planned,
        0,
        None,
    );
    let renamed = stage.clone().with_title("Этап 1 (ревизия)");
    assert_eq!(renamed.title(), "Этап 1 (ревизия)");
    assert_eq!(renamed.id(), stage.id());
    assert_eq!(renamed.sequence(), stage.sequence());
    assert_eq!(renamed.status(), stage.status());
}
