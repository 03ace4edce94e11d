//! Stage selection, rename, and epoch-discard flows.

use crate::in_memory::helpers::{add_task, board_env, member, seed_stage};
use raciboard::directory::domain::UserId;
use raciboard::grid::services::BoardError;
use raciboard::stage::services::StageDirectoryError;
use rstest::rstest;

const IVANOV: UserId = UserId::new(42);

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn switching_stages_shows_each_stage_own_tasks() {
    let mut env = board_env(&[member(42, "Иванов Иван", "ivanov")]);
    let first = seed_stage(&env, "Этап 1").await;
    let second = seed_stage(&env, "Этап 2").await;
    env.board.open().await.expect("open");
    let task_in_first = add_task(&mut env, "Задача 1").await;

    env.board.select_stage(second).await.expect("select second");
    assert!(env.board.registry().tasks().is_empty());
    let task_in_second = add_task(&mut env, "Задача 2").await;

    env.board.select_stage(first).await.expect("select first");
    assert_eq!(env.board.grid().row_ids(), [task_in_first]);

    env.board.select_stage(second).await.expect("select second");
    assert_eq!(env.board.grid().row_ids(), [task_in_second]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_late_response_for_an_abandoned_stage_is_dropped() {
    let mut env = board_env(&[member(42, "Иванов Иван", "ivanov")]);
    let first = seed_stage(&env, "Этап 1").await;
    let second = seed_stage(&env, "Этап 2").await;
    env.board.open().await.expect("open");
    add_task(&mut env, "Задача 1").await;

    // Capture a fetch for the first stage, then move on before it lands.
    let stale_epoch = env.board.selection_epoch();
    let stale_tasks = Ok(env.board.registry().tasks().to_vec());
    env.board.select_stage(second).await.expect("select second");

    let adopted = env
        .board
        .apply_task_fetch(stale_epoch, first, stale_tasks)
        .expect("apply");

    assert!(!adopted);
    assert_eq!(env.board.registry().stage_id(), Some(second));
    assert!(env.board.grid().row_ids().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn renames_only_commit_after_acknowledgement() {
    let mut env = board_env(&[]);
    let stage_id = seed_stage(&env, "Этап 1").await;
    env.board.open().await.expect("open");

    env.board
        .rename_stage(stage_id, "Этап 1 (новый)")
        .await
        .expect("rename");

    assert_eq!(
        env.board.stages().display_title(stage_id),
        Some("Этап 1 (новый)")
    );
    assert_eq!(env.board.stages().stages()[0].title(), "Этап 1 (новый)");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn the_last_stage_cannot_be_deleted() {
    let mut env = board_env(&[]);
    let only = seed_stage(&env, "Этап 1").await;
    env.board.open().await.expect("open");

    let result = env.board.delete_stage(only).await;

    assert!(matches!(
        result,
        Err(BoardError::Stage(StageDirectoryError::LastStage(_)))
    ));
    assert_eq!(env.board.stages().stages().len(), 1);
    assert_eq!(env.board.stages().selected(), Some(only));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edits_land_on_the_newly_selected_stage() {
    let mut env = board_env(&[member(42, "Иванов Иван", "ivanov")]);
    seed_stage(&env, "Этап 1").await;
    let second = seed_stage(&env, "Этап 2").await;
    env.board.open().await.expect("open");
    env.board.add_member(IVANOV).await.expect("add member");

    env.board.select_stage(second).await.expect("select second");
    let task_id = add_task(&mut env, "Задача 2").await;
    env.board.load_row(task_id).await.expect("load row");
    env.board
        .set_cell(task_id, IVANOV, "R")
        .await
        .expect("assign");

    assert_eq!(env.board.cell_code(task_id, IVANOV), Some("R"));
}
