//! Order numbering and uniqueness scenarios.

use crate::in_memory::helpers::{Erp, erp, runtime};
use atrium::employee::domain::PrincipalId;
use atrium::order::domain::OrderNumber;
use atrium::order::services::CreateOrderRequest;
use chrono::{TimeZone, Utc};
use rstest::rstest;
use rust_decimal::Decimal;
use std::io;
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Tests the external number format against a pinned instant.
#[rstest]
fn order_number_format_is_pinned() {
    let instant = Utc
        .with_ymd_and_hms(2025, 5, 28, 10, 0, 0)
        .single()
        .expect("valid instant");
    assert_eq!(
        OrderNumber::from_datetime(instant).as_str(),
        "ORD-20250528-100000"
    );
}

/// Tests the full intake flow: provisioned employee records an order.
#[rstest]
fn provisioned_employee_records_pending_order(runtime: io::Result<Runtime>, erp: Erp) {
    let rt = runtime.expect("runtime creation");
    let employee = rt
        .block_on(
            erp.employees
                .authorize(Some(PrincipalId::from_uuid(Uuid::new_v4()))),
        )
        .expect("authorization should provision");

    let order = rt
        .block_on(erp.orders.create_order(
            CreateOrderRequest::new("Hollis & Co", "purchasing@hollis.example", "555-0156")
                .with_notes("Deliver to loading dock"),
            employee.id(),
        ))
        .expect("order creation should succeed");

    assert_eq!(order.created_by(), employee.id());
    assert_eq!(order.total_amount(), Decimal::ZERO);
    assert_eq!(
        order.order_number(),
        &OrderNumber::from_datetime(order.order_date())
    );

    let listed = rt
        .block_on(erp.orders.list_orders())
        .expect("listing should succeed");
    assert_eq!(listed, vec![order]);
}
