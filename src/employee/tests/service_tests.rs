//! Service orchestration tests for authorization and auto-provisioning.

use std::sync::Arc;

use crate::employee::{
    adapters::memory::InMemoryEmployeeRepository,
    domain::{DEFAULT_DEPARTMENT, DEFAULT_PHONE, DEFAULT_POSITION, PrincipalId},
    services::{AccessError, ProvisioningError, ProvisioningService},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use uuid::Uuid;

type TestService = ProvisioningService<InMemoryEmployeeRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    ProvisioningService::new(
        Arc::new(InMemoryEmployeeRepository::new()),
        Arc::new(DefaultClock),
    )
}

fn principal() -> PrincipalId {
    PrincipalId::from_uuid(Uuid::new_v4())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn authorize_rejects_missing_principal(service: TestService) {
    let result = service.authorize(None).await;
    assert!(matches!(
        result,
        Err(ProvisioningError::Access(AccessError::NotAuthenticated))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn authorize_provisions_first_time_principal(service: TestService) {
    let bound = principal();
    let employee = service
        .authorize(Some(bound))
        .await
        .expect("authorization should provision a profile");

    assert_eq!(employee.principal(), bound);
    assert_eq!(employee.department(), DEFAULT_DEPARTMENT);
    assert_eq!(employee.position(), DEFAULT_POSITION);
    assert_eq!(employee.phone(), DEFAULT_PHONE);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn authorize_is_idempotent_per_principal(service: TestService) {
    let bound = principal();
    let first = service
        .authorize(Some(bound))
        .await
        .expect("first authorization should succeed");
    let second = service
        .authorize(Some(bound))
        .await
        .expect("second authorization should succeed");

    assert_eq!(first, second);
    let directory = service.directory().await.expect("directory should load");
    assert_eq!(directory.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn profile_does_not_provision(service: TestService) {
    let bound = principal();
    let result = service.profile(bound).await;

    assert!(matches!(
        result,
        Err(ProvisioningError::Access(AccessError::NotProvisioned(p))) if p == bound
    ));
    let directory = service.directory().await.expect("directory should load");
    assert!(directory.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn profile_returns_existing_binding(service: TestService) {
    let bound = principal();
    let provisioned = service
        .ensure_employee(bound)
        .await
        .expect("provisioning should succeed");

    let fetched = service
        .profile(bound)
        .await
        .expect("profile lookup should succeed");
    assert_eq!(fetched, provisioned);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn member_candidates_exclude_the_requester(service: TestService) {
    let requester = service
        .ensure_employee(principal())
        .await
        .expect("provisioning should succeed");
    let colleague = service
        .ensure_employee(principal())
        .await
        .expect("provisioning should succeed");

    let candidates = service
        .member_candidates(requester.id())
        .await
        .expect("candidate listing should succeed");

    assert_eq!(candidates, vec![colleague]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn directory_lists_every_profile(service: TestService) {
    let first = service
        .ensure_employee(principal())
        .await
        .expect("provisioning should succeed");
    let second = service
        .ensure_employee(principal())
        .await
        .expect("provisioning should succeed");

    let directory = service.directory().await.expect("directory should load");
    assert_eq!(directory, vec![first, second]);
}
