//! Cascade behaviour after task deletes and member removals.

use crate::in_memory::helpers::{add_task, board_env, member, seed_stage};
use raciboard::directory::domain::UserId;
use raciboard::grid::ports::AssignmentGateway;
use raciboard::remote::ServiceError;
use rstest::rstest;

const IVANOV: UserId = UserId::new(42);

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_task_cascades_to_its_assignments() {
    let mut env = board_env(&[member(42, "Иванов Иван", "ivanov")]);
    seed_stage(&env, "Этап 1").await;
    env.board.open().await.expect("open");
    env.board.add_member(IVANOV).await.expect("add member");
    let task_id = add_task(&mut env, "Задача 1").await;
    env.board.load_row(task_id).await.expect("load row");
    env.board
        .set_cell(task_id, IVANOV, "R")
        .await
        .expect("assign");

    env.board.delete_task(task_id).await.expect("delete task");
    // The server cascades the assignment delete with the task.
    env.assign_gw.forget_task(task_id);

    let fetched = env.assign_gw.fetch_assignments(task_id).await;
    assert!(matches!(fetched, Err(ServiceError::NotFound(_))));
    assert!(env.board.grid().row_ids().is_empty());
    assert!(env.board.registry().task(task_id).is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removing_a_member_clears_their_assignments_everywhere() {
    let mut env = board_env(&[
        member(42, "Иванов Иван", "ivanov"),
        member(43, "Петров Пётр", "petrov"),
    ]);
    seed_stage(&env, "Этап 1").await;
    env.board.open().await.expect("open");
    env.board.add_member(IVANOV).await.expect("add ivanov");
    env.board
        .add_member(UserId::new(43))
        .await
        .expect("add petrov");
    let first = add_task(&mut env, "Задача 1").await;
    let second = add_task(&mut env, "Задача 2").await;
    env.board.load_row(first).await.expect("load");
    env.board.load_row(second).await.expect("load");
    env.board.set_cell(first, IVANOV, "R").await.expect("assign");
    env.board
        .set_cell(second, IVANOV, "A")
        .await
        .expect("assign");
    env.board
        .set_cell(second, UserId::new(43), "C")
        .await
        .expect("assign");

    // The server cascade-clears the removed member's entries.
    env.assign_gw.purge_user(IVANOV);
    env.board.remove_member(IVANOV).await.expect("remove");

    env.board.load_row(first).await.expect("reload");
    env.board.load_row(second).await.expect("reload");
    assert_eq!(env.board.cell_code(first, IVANOV), None);
    assert_eq!(env.board.cell_code(second, IVANOV), None);
    // Other members' assignments are untouched.
    assert_eq!(env.board.cell_code(second, UserId::new(43)), Some("C"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_vanished_task_fails_its_next_load() {
    let mut env = board_env(&[member(42, "Иванов Иван", "ivanov")]);
    seed_stage(&env, "Этап 1").await;
    env.board.open().await.expect("open");
    let task_id = add_task(&mut env, "Задача 1").await;

    // Another session deletes the task; this session still shows the row.
    env.assign_gw.forget_task(task_id);

    let result = env.board.load_row(task_id).await;
    assert!(result.is_err());
}
