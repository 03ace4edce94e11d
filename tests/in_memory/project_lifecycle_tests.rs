//! Project lifecycle and deadline sweep flows.

use std::sync::Arc;

use mockable::DefaultClock;
use raciboard::directory::domain::UserId;
use raciboard::project::adapters::memory::{
    InMemoryNotificationGateway, InMemoryProjectGateway,
};
use raciboard::project::domain::ProjectStatus;
use raciboard::project::ports::NotificationGateway;
use raciboard::project::services::ProjectLifecycleService;
use raciboard::stage::domain::StageId;
use raciboard::task::domain::{Priority, Task, TaskData, TaskId};
use raciboard::task::services::DeadlineSweep;
use chrono::Utc;
use rstest::{fixture, rstest};

type Lifecycle = ProjectLifecycleService<InMemoryProjectGateway, DefaultClock>;

const ADMIN: UserId = UserId::new(1);
const REQUESTER: UserId = UserId::new(7);

#[fixture]
fn lifecycle() -> Lifecycle {
    ProjectLifecycleService::new(
        Arc::new(InMemoryProjectGateway::new()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_request_travels_from_draft_to_archive(lifecycle: Lifecycle) {
    let draft = lifecycle
        .submit_request("Закупки", Some("Годовой цикл закупок".to_owned()), REQUESTER)
        .await
        .expect("request");
    assert_eq!(draft.status(), ProjectStatus::Draft);

    let approved = lifecycle.approve(draft.id()).await.expect("approve");
    assert!(approved.is_mutable());

    let archived = lifecycle.archive(draft.id()).await.expect("archive");
    assert!(archived.is_archived());
    assert!(!archived.is_mutable());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_requests_leave_no_trace(lifecycle: Lifecycle) {
    let draft = lifecycle
        .submit_request("Закупки", None, REQUESTER)
        .await
        .expect("request");

    lifecycle.reject(draft.id()).await.expect("reject");

    let visible = lifecycle.list_for_user(ADMIN).await.expect("list");
    assert!(visible.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn admin_created_projects_are_immediately_active(lifecycle: Lifecycle) {
    let project = lifecycle
        .create_direct("Закупки", None, None, ADMIN)
        .await
        .expect("create");

    let visible = lifecycle.list_for_user(REQUESTER).await.expect("list");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id(), project.id());
    assert!(visible[0].is_mutable());
}

fn task_due(id: u64, title: &str, days_from_now: i64) -> Task {
    Task::from_data(TaskData {
        id: TaskId::new(id),
        stage_id: StageId::new(1),
        title: title.to_owned(),
        description: None,
        priority: Priority::Medium,
        completed: false,
        deadline: Some(Utc::now().date_naive() + chrono::Duration::days(days_from_now)),
        created_at: Utc::now(),
    })
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn the_sweep_tells_members_about_imminent_deadlines() {
    let notifications = Arc::new(InMemoryNotificationGateway::new());
    let sweep = DeadlineSweep::new(Arc::clone(&notifications), Arc::new(DefaultClock), 3);
    let tasks = vec![
        task_due(1, "Задача 1", 0),
        task_due(2, "Задача 2", 2),
        task_due(3, "Задача 3", 10),
    ];

    let pushed = sweep
        .run(&tasks, &[REQUESTER])
        .await
        .expect("sweep should succeed");

    assert_eq!(pushed, 2);
    let inbox = notifications
        .list_notifications(REQUESTER)
        .await
        .expect("inbox");
    assert_eq!(inbox.len(), 2);
    assert!(inbox.iter().all(|n| n.message().starts_with("Task '")));
    assert!(inbox.iter().any(|n| n.message().contains("Задача 1")));
    assert!(inbox.iter().all(|n| !n.message().contains("Задача 3")));
}
