//! End-to-end RACI matrix editing over in-memory gateways.

use crate::in_memory::helpers::{add_task, board_env, member, seed_stage};
use raciboard::directory::domain::UserId;
use raciboard::grid::ports::AssignmentGateway;
use rstest::rstest;

const IVANOV: UserId = UserId::new(42);

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assigning_a_cell_round_trips_through_the_server() {
    let mut env = board_env(&[member(42, "Иванов Иван", "ivanov")]);
    seed_stage(&env, "Этап 1").await;
    env.board.open().await.expect("open");
    env.board.add_member(IVANOV).await.expect("add member");
    let task_id = add_task(&mut env, "Задача 1").await;
    env.board.load_row(task_id).await.expect("load row");

    env.board
        .set_cell(task_id, IVANOV, "R")
        .await
        .expect("assign R");

    let stored = env
        .assign_gw
        .fetch_assignments(task_id)
        .await
        .expect("fetch");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].user_id, IVANOV);
    assert_eq!(env.board.cell_code(task_id, IVANOV), Some("R"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clearing_a_cell_empties_the_stored_row() {
    let mut env = board_env(&[member(42, "Иванов Иван", "ivanov")]);
    seed_stage(&env, "Этап 1").await;
    env.board.open().await.expect("open");
    env.board.add_member(IVANOV).await.expect("add member");
    let task_id = add_task(&mut env, "Задача 1").await;
    env.board.load_row(task_id).await.expect("load row");
    env.board
        .set_cell(task_id, IVANOV, "R")
        .await
        .expect("assign R");

    env.board
        .set_cell(task_id, IVANOV, "")
        .await
        .expect("clear cell");

    let stored = env
        .assign_gw
        .fetch_assignments(task_id)
        .await
        .expect("fetch");
    assert!(stored.is_empty());
    assert_eq!(env.board.cell_code(task_id, IVANOV), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn replacing_with_identical_entries_is_idempotent() {
    let mut env = board_env(&[member(42, "Иванов Иван", "ivanov")]);
    seed_stage(&env, "Этап 1").await;
    env.board.open().await.expect("open");
    env.board.add_member(IVANOV).await.expect("add member");
    let task_id = add_task(&mut env, "Задача 1").await;
    env.board.load_row(task_id).await.expect("load row");

    env.board
        .set_cell(task_id, IVANOV, "A")
        .await
        .expect("first submit");
    let first = env
        .assign_gw
        .fetch_assignments(task_id)
        .await
        .expect("fetch");
    env.board
        .set_cell(task_id, IVANOV, "A")
        .await
        .expect("second submit");
    let second = env
        .assign_gw
        .fetch_assignments(task_id)
        .await
        .expect("fetch");

    assert_eq!(first, second);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn one_member_holds_one_role_per_task() {
    let mut env = board_env(&[member(42, "Иванов Иван", "ivanov")]);
    seed_stage(&env, "Этап 1").await;
    env.board.open().await.expect("open");
    env.board.add_member(IVANOV).await.expect("add member");
    let task_id = add_task(&mut env, "Задача 1").await;
    env.board.load_row(task_id).await.expect("load row");

    env.board
        .set_cell(task_id, IVANOV, "R")
        .await
        .expect("assign R");
    env.board
        .set_cell(task_id, IVANOV, "C")
        .await
        .expect("reassign C");

    let stored = env
        .assign_gw
        .fetch_assignments(task_id)
        .await
        .expect("fetch");
    assert_eq!(stored.len(), 1);
    assert_eq!(env.board.cell_code(task_id, IVANOV), Some("C"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drafts_survive_navigation_between_boards() {
    let mut env = board_env(&[member(42, "Иванов Иван", "ivanov")]);
    seed_stage(&env, "Этап 1").await;
    env.board.open().await.expect("open");
    env.board.add_member(IVANOV).await.expect("add member");
    let task_id = add_task(&mut env, "Задача 1").await;
    env.board.load_row(task_id).await.expect("load row");
    env.board
        .set_cell(task_id, IVANOV, "I")
        .await
        .expect("assign I");

    env.board.grid().stash_draft().await.expect("stash");

    // Reopening rebinds the grid and resets every row; the draft brings
    // the unconfirmed edit back.
    env.board.open().await.expect("reopen");
    assert_eq!(env.board.cell_code(task_id, IVANOV), None);
    let applied = env
        .board
        .grid_mut()
        .restore_draft()
        .await
        .expect("restore");

    assert!(applied);
    assert_eq!(env.board.cell_code(task_id, IVANOV), Some("I"));
}
