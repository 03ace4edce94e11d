//! Membership roster cache tests.

use std::sync::Arc;

use crate::directory::adapters::memory::InMemoryMembershipGateway;
use crate::directory::domain::{Member, UserId};
use crate::directory::services::MembershipRoster;
use crate::project::domain::ProjectId;
use crate::remote::ServiceError;
use rstest::{fixture, rstest};

const PROJECT: ProjectId = ProjectId::new(1);

fn member(id: u64, name: &str) -> Member {
    Member::new(UserId::new(id), name, format!("user{id}")).expect("valid member")
}

#[fixture]
fn gateway() -> Arc<InMemoryMembershipGateway> {
    let gateway = Arc::new(InMemoryMembershipGateway::new());
    gateway.register_project(PROJECT);
    gateway.register_user(member(42, "Иванов Иван"));
    gateway.register_user(member(43, "Петров Пётр"));
    gateway
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_makes_the_member_visible(gateway: Arc<InMemoryMembershipGateway>) {
    let mut roster = MembershipRoster::new(gateway, PROJECT);

    roster.add(UserId::new(42)).await.expect("add should succeed");

    assert!(roster.contains(UserId::new(42)));
    assert_eq!(roster.members().len(), 1);
    assert_eq!(roster.members()[0].full_name(), "Иванов Иван");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_drops_the_member(gateway: Arc<InMemoryMembershipGateway>) {
    let mut roster = MembershipRoster::new(gateway, PROJECT);
    roster.add(UserId::new(42)).await.expect("add 42");
    roster.add(UserId::new(43)).await.expect("add 43");

    roster
        .remove(UserId::new(42))
        .await
        .expect("remove should succeed");

    assert!(!roster.contains(UserId::new(42)));
    assert!(roster.contains(UserId::new(43)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_user_is_reported_not_found(gateway: Arc<InMemoryMembershipGateway>) {
    let mut roster = MembershipRoster::new(gateway, PROJECT);

    let result = roster.add(UserId::new(999)).await;

    assert!(matches!(result, Err(ServiceError::NotFound(_))));
    assert!(roster.members().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_refresh_keeps_the_cached_list(gateway: Arc<InMemoryMembershipGateway>) {
    let mut roster = MembershipRoster::new(gateway, PROJECT);
    roster.add(UserId::new(42)).await.expect("add 42");

    let mut orphan = MembershipRoster::new(
        Arc::new(InMemoryMembershipGateway::new()),
        ProjectId::new(77),
    );
    let result = orphan.refresh().await;

    assert!(matches!(result, Err(ServiceError::NotFound(_))));
    assert!(roster.contains(UserId::new(42)));
}
