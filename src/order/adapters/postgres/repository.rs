//! `PostgreSQL` repository implementation for order storage.

use super::{
    models::{NewOrderRow, OrderRow},
    schema::orders,
};
use crate::employee::domain::EmployeeId;
use crate::order::{
    domain::{Order, OrderId, OrderNumber, OrderStatus, PersistedOrderData},
    ports::{OrderRepository, OrderRepositoryError, OrderRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by order adapters.
pub type OrderPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed order repository.
///
/// Relies on the `orders_order_number_key` unique constraint to reject
/// same-second order-number collisions.
#[derive(Debug, Clone)]
pub struct PostgresOrderRepository {
    pool: OrderPgPool,
}

impl PostgresOrderRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: OrderPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> OrderRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> OrderRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(OrderRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(OrderRepositoryError::persistence)?
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn store(&self, order: &Order) -> OrderRepositoryResult<()> {
        let order_id = order.id();
        let order_number = order.order_number().clone();
        let new_row = to_new_row(order);

        self.run_blocking(move |connection| {
            diesel::insert_into(orders::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_order_number_unique_violation(info.as_ref()) =>
                    {
                        OrderRepositoryError::DuplicateOrderNumber(order_number.clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        OrderRepositoryError::DuplicateOrder(order_id)
                    }
                    _ => OrderRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: OrderId) -> OrderRepositoryResult<Option<Order>> {
        self.run_blocking(move |connection| {
            let row = orders::table
                .filter(orders::id.eq(id.into_inner()))
                .select(OrderRow::as_select())
                .first::<OrderRow>(connection)
                .optional()
                .map_err(OrderRepositoryError::persistence)?;
            row.map(row_to_order).transpose()
        })
        .await
    }

    async fn list_all(&self) -> OrderRepositoryResult<Vec<Order>> {
        self.run_blocking(move |connection| {
            let rows = orders::table
                .order(orders::order_date.desc())
                .select(OrderRow::as_select())
                .load::<OrderRow>(connection)
                .map_err(OrderRepositoryError::persistence)?;
            rows.into_iter().map(row_to_order).collect()
        })
        .await
    }
}

fn to_new_row(order: &Order) -> NewOrderRow {
    NewOrderRow {
        id: order.id().into_inner(),
        order_number: order.order_number().as_str().to_owned(),
        customer_name: order.customer_name().to_owned(),
        customer_email: order.customer_email().to_owned(),
        customer_phone: order.customer_phone().to_owned(),
        order_date: order.order_date(),
        status: order.status().as_str().to_owned(),
        total_amount: order.total_amount(),
        created_by: order.created_by().into_inner(),
        notes: order.notes().to_owned(),
    }
}

fn row_to_order(row: OrderRow) -> OrderRepositoryResult<Order> {
    let status =
        OrderStatus::try_from(row.status.as_str()).map_err(OrderRepositoryError::persistence)?;
    Ok(Order::from_persisted(PersistedOrderData {
        id: OrderId::from_uuid(row.id),
        order_number: OrderNumber::from_persisted(row.order_number),
        customer_name: row.customer_name,
        customer_email: row.customer_email,
        customer_phone: row.customer_phone,
        order_date: row.order_date,
        status,
        total_amount: row.total_amount,
        created_by: EmployeeId::from_uuid(row.created_by),
        notes: row.notes,
    }))
}

fn is_order_number_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "orders_order_number_key")
}
