//! Authorization and auto-provisioning scenarios.

use crate::in_memory::helpers::{Erp, erp, runtime};
use atrium::employee::domain::{DEFAULT_DEPARTMENT, DEFAULT_PHONE, DEFAULT_POSITION, PrincipalId};
use atrium::employee::services::{AccessError, ProvisioningError};
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Tests that a first-time principal is provisioned before gated work.
#[rstest]
fn first_login_provisions_default_profile(runtime: io::Result<Runtime>, erp: Erp) {
    let rt = runtime.expect("runtime creation");
    let principal = PrincipalId::from_uuid(Uuid::new_v4());

    let employee = rt
        .block_on(erp.employees.authorize(Some(principal)))
        .expect("authorization should provision");

    assert_eq!(employee.department(), DEFAULT_DEPARTMENT);
    assert_eq!(employee.position(), DEFAULT_POSITION);
    assert_eq!(employee.phone(), DEFAULT_PHONE);

    // The provisioned profile immediately gates project creation.
    let project = rt
        .block_on(
            erp.projects
                .create_project(crate::in_memory::helpers::launch_project(), employee.id()),
        )
        .expect("gated operation should proceed after provisioning");
    assert_eq!(project.manager(), employee.id());
}

/// Tests that an unauthenticated request is rejected outright.
#[rstest]
fn missing_principal_is_not_authenticated(runtime: io::Result<Runtime>, erp: Erp) {
    let rt = runtime.expect("runtime creation");
    let result = rt.block_on(erp.employees.authorize(None));
    assert!(matches!(
        result,
        Err(ProvisioningError::Access(AccessError::NotAuthenticated))
    ));
}

/// Tests that repeated authorization reuses the provisioned profile.
#[rstest]
fn repeated_logins_share_one_profile(runtime: io::Result<Runtime>, erp: Erp) {
    let rt = runtime.expect("runtime creation");
    let principal = PrincipalId::from_uuid(Uuid::new_v4());

    let first = rt
        .block_on(erp.employees.authorize(Some(principal)))
        .expect("first authorization");
    let second = rt
        .block_on(erp.employees.authorize(Some(principal)))
        .expect("second authorization");

    assert_eq!(first, second);
    let directory = rt
        .block_on(erp.employees.directory())
        .expect("directory should load");
    assert_eq!(directory.len(), 1);
}

/// Tests that provisioning applies to every principal, not a designated
/// administrator account.
#[rstest]
fn every_principal_is_provisioned_uniformly(runtime: io::Result<Runtime>, erp: Erp) {
    let rt = runtime.expect("runtime creation");

    for _ in 0..3 {
        let principal = PrincipalId::from_uuid(Uuid::new_v4());
        let employee = rt
            .block_on(erp.employees.authorize(Some(principal)))
            .expect("authorization should provision");
        assert_eq!(employee.department(), DEFAULT_DEPARTMENT);
    }

    let directory = rt
        .block_on(erp.employees.directory())
        .expect("directory should load");
    assert_eq!(directory.len(), 3);
}
