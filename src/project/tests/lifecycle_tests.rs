//! Lifecycle service tests over the in-memory project gateway.

use std::sync::Arc;

use crate::directory::domain::UserId;
use crate::project::adapters::memory::{InMemoryNotificationGateway, InMemoryProjectGateway};
use crate::project::domain::ProjectStatus;
use crate::project::ports::NotificationGateway;
use crate::project::services::{ProjectLifecycleError, ProjectLifecycleService};
use crate::remote::ServiceError;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = ProjectLifecycleService<InMemoryProjectGateway, DefaultClock>;

const ADMIN: UserId = UserId::new(1);
const REQUESTER: UserId = UserId::new(7);

#[fixture]
fn service() -> TestService {
    ProjectLifecycleService::new(Arc::new(InMemoryProjectGateway::new()), Arc::new(DefaultClock))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn submitted_request_becomes_a_draft(service: TestService) {
    let project = service
        .submit_request("Закупки", Some("Годовой цикл".to_owned()), REQUESTER)
        .await
        .expect("submission should succeed");

    assert_eq!(project.status(), ProjectStatus::Draft);
    assert_eq!(project.title(), "Закупки");
    assert_eq!(project.created_by(), REQUESTER);
    assert!(!project.is_mutable());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_request_title_is_rejected_client_side(service: TestService) {
    let result = service.submit_request("  ", None, REQUESTER).await;
    assert!(matches!(result, Err(ProjectLifecycleError::Domain(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn admin_creation_skips_the_draft_stage(service: TestService) {
    let project = service
        .create_direct("Direct", None, None, ADMIN)
        .await
        .expect("creation should succeed");

    assert_eq!(project.status(), ProjectStatus::Approved);
    assert!(project.is_mutable());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn approval_promotes_the_draft(service: TestService) {
    let draft = service
        .submit_request("Закупки", None, REQUESTER)
        .await
        .expect("submission should succeed");

    let approved = service.approve(draft.id()).await.expect("approval");

    assert_eq!(approved.status(), ProjectStatus::Approved);
    let listed = service.list_for_user(ADMIN).await.expect("listing");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status(), ProjectStatus::Approved);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejection_deletes_the_draft(service: TestService) {
    let draft = service
        .submit_request("Закупки", None, REQUESTER)
        .await
        .expect("submission should succeed");

    service.reject(draft.id()).await.expect("rejection");

    let listed = service.list_for_user(ADMIN).await.expect("listing");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn approved_projects_cannot_be_rejected(service: TestService) {
    let project = service
        .create_direct("Direct", None, None, ADMIN)
        .await
        .expect("creation should succeed");

    let result = service.reject(project.id()).await;

    assert!(matches!(
        result,
        Err(ProjectLifecycleError::Service(ServiceError::Conflict(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn archive_is_refused_for_drafts(service: TestService) {
    let draft = service
        .submit_request("Закупки", None, REQUESTER)
        .await
        .expect("submission should succeed");

    let result = service.archive(draft.id()).await;

    assert!(matches!(
        result,
        Err(ProjectLifecycleError::Service(ServiceError::Conflict(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn notifications_list_newest_first_and_mark_read() {
    let gateway = InMemoryNotificationGateway::new();
    let first = gateway.push(REQUESTER, "first").await.expect("push");
    let second = gateway.push(REQUESTER, "second").await.expect("push");

    let listed = gateway.list_notifications(REQUESTER).await.expect("list");
    assert_eq!(listed[0].id(), second.id());
    assert_eq!(listed[1].id(), first.id());
    assert!(listed.iter().all(|n| !n.is_read()));

    gateway.mark_read(first.id()).await.expect("mark read");
    let listed = gateway.list_notifications(REQUESTER).await.expect("list");
    assert!(listed[1].is_read());
}
