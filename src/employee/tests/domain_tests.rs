//! Domain-focused tests for employee profile construction.

use crate::employee::domain::{
    DEFAULT_DEPARTMENT, DEFAULT_PHONE, DEFAULT_POSITION, Employee, EmployeeDomainError,
    PrincipalId,
};
use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};
use rstest::rstest;
use uuid::Uuid;

fn principal() -> PrincipalId {
    PrincipalId::from_uuid(Uuid::new_v4())
}

#[rstest]
fn new_accepts_populated_fields() {
    let hire_date = NaiveDate::from_ymd_opt(2024, 11, 3).expect("valid date");
    let employee = Employee::new(principal(), "Engineering", "Developer", "555-0100", hire_date)
        .expect("valid profile");

    assert_eq!(employee.department(), "Engineering");
    assert_eq!(employee.position(), "Developer");
    assert_eq!(employee.phone(), "555-0100");
    assert_eq!(employee.hire_date(), hire_date);
}

#[rstest]
#[case("")]
#[case("   ")]
fn new_rejects_blank_department(#[case] department: &str) {
    let hire_date = NaiveDate::from_ymd_opt(2024, 11, 3).expect("valid date");
    let result = Employee::new(principal(), department, "Developer", "555-0100", hire_date);
    assert_eq!(
        result.expect_err("blank department should be rejected"),
        EmployeeDomainError::BlankDepartment
    );
}

#[rstest]
#[case("")]
#[case("   ")]
fn new_rejects_blank_position(#[case] position: &str) {
    let hire_date = NaiveDate::from_ymd_opt(2024, 11, 3).expect("valid date");
    let result = Employee::new(principal(), "Engineering", position, "555-0100", hire_date);
    assert_eq!(
        result.expect_err("blank position should be rejected"),
        EmployeeDomainError::BlankPosition
    );
}

#[rstest]
fn provisioned_applies_default_profile() {
    let clock = DefaultClock;
    let bound = principal();
    let employee = Employee::provisioned(bound, &clock);

    assert_eq!(employee.principal(), bound);
    assert_eq!(employee.department(), DEFAULT_DEPARTMENT);
    assert_eq!(employee.position(), DEFAULT_POSITION);
    assert_eq!(employee.phone(), DEFAULT_PHONE);
    assert_eq!(employee.hire_date(), clock.utc().date_naive());
}

#[rstest]
fn provisioned_profiles_receive_distinct_identifiers() {
    let clock = DefaultClock;
    let first = Employee::provisioned(principal(), &clock);
    let second = Employee::provisioned(principal(), &clock);
    assert_ne!(first.id(), second.id());
}
