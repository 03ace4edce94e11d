//! Role catalog cache tests.

use std::sync::Arc;

use crate::directory::adapters::memory::InMemoryRoleCatalogGateway;
use crate::directory::domain::RoleCode;
use crate::directory::services::{RoleCatalog, RoleCatalogError};
use rstest::{fixture, rstest};

type TestCatalog = RoleCatalog<InMemoryRoleCatalogGateway>;

#[fixture]
fn gateway() -> Arc<InMemoryRoleCatalogGateway> {
    Arc::new(InMemoryRoleCatalogGateway::seeded())
}

#[fixture]
fn catalog(gateway: Arc<InMemoryRoleCatalogGateway>) -> TestCatalog {
    RoleCatalog::new(gateway)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn loads_the_standard_raci_set(mut catalog: TestCatalog) {
    catalog.ensure_loaded().await.expect("load should succeed");

    let codes: Vec<&str> = catalog
        .roles()
        .iter()
        .map(|role| role.code().as_str())
        .collect();
    assert_eq!(codes, ["R", "A", "C", "I"]);
    assert!(catalog.roles().iter().all(|role| !role.is_custom()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fetches_the_catalog_only_once_per_session() {
    let gateway = Arc::new(InMemoryRoleCatalogGateway::seeded());
    let mut catalog = RoleCatalog::new(Arc::clone(&gateway));

    catalog.ensure_loaded().await.expect("first load");
    catalog.ensure_loaded().await.expect("second load");
    catalog.ensure_loaded().await.expect("third load");

    assert_eq!(gateway.list_calls(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn finds_roles_by_trimmed_code(mut catalog: TestCatalog) {
    catalog.ensure_loaded().await.expect("load should succeed");

    let role = catalog.find_by_code("  R ").expect("role should resolve");
    assert_eq!(role.code().as_str(), "R");
    assert!(catalog.find_by_code("Q").is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn custom_role_becomes_available_immediately(mut catalog: TestCatalog) {
    catalog.ensure_loaded().await.expect("load should succeed");

    let code = RoleCode::new("Reviewer").expect("valid code");
    let role = catalog.add_custom(code).await.expect("creation should succeed");

    assert!(role.is_custom());
    assert_eq!(
        catalog.find_by_code("Reviewer").map(|found| found.id()),
        Some(role.id())
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_code_is_rejected_client_side(mut catalog: TestCatalog) {
    catalog.ensure_loaded().await.expect("load should succeed");

    let code = RoleCode::new("R").expect("valid code");
    let result = catalog.add_custom(code).await;

    assert!(matches!(result, Err(RoleCatalogError::DuplicateCode(_))));
}
