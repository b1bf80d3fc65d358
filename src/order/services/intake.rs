//! Service layer for customer order creation and lookup.

use crate::employee::domain::EmployeeId;
use crate::order::{
    domain::{NewOrderData, Order, OrderDomainError, OrderId},
    ports::{OrderRepository, OrderRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a customer order.
///
/// The order number, date, status, and total are not part of the payload:
/// all four are assigned at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrderRequest {
    customer_name: String,
    customer_email: String,
    customer_phone: String,
    notes: String,
}

impl CreateOrderRequest {
    /// Creates a request with required customer fields.
    #[must_use]
    pub fn new(
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        customer_phone: impl Into<String>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            customer_phone: customer_phone.into(),
            notes: String::new(),
        }
    }

    /// Sets free-form notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Service-level errors for order intake operations.
#[derive(Debug, Error)]
pub enum OrderIntakeError {
    /// The order was not found.
    #[error("order not found: {0}")]
    NotFound(OrderId),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] OrderDomainError),

    /// Repository operation failed.
    ///
    /// Includes [`OrderRepositoryError::DuplicateOrderNumber`] when two
    /// orders were created within the same wall-clock second; the caller
    /// may resubmit, no automatic retry happens here.
    #[error(transparent)]
    Repository(#[from] OrderRepositoryError),
}

/// Result type for order intake operations.
pub type OrderIntakeResult<T> = Result<T, OrderIntakeError>;

/// Order intake orchestration service.
#[derive(Clone)]
pub struct OrderIntakeService<R, C>
where
    R: OrderRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> OrderIntakeService<R, C>
where
    R: OrderRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new order intake service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Records a pending order with a generated number for the requester.
    ///
    /// # Errors
    ///
    /// Returns [`OrderIntakeError::Domain`] when customer fields fail
    /// validation, or [`OrderIntakeError::Repository`] when persistence
    /// fails, including the same-second order-number collision.
    pub async fn create_order(
        &self,
        request: CreateOrderRequest,
        requester: EmployeeId,
    ) -> OrderIntakeResult<Order> {
        let order = Order::new(
            NewOrderData {
                customer_name: request.customer_name,
                customer_email: request.customer_email,
                customer_phone: request.customer_phone,
                notes: request.notes,
                created_by: requester,
            },
            &*self.clock,
        )?;
        self.repository.store(&order).await?;
        tracing::info!(
            order = %order.id(),
            number = %order.order_number(),
            "recorded customer order"
        );
        Ok(order)
    }

    /// Returns all orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`OrderIntakeError::Repository`] when persistence fails.
    pub async fn list_orders(&self) -> OrderIntakeResult<Vec<Order>> {
        Ok(self.repository.list_all().await?)
    }

    /// Returns the order with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`OrderIntakeError::NotFound`] when the order does not
    /// exist, or a repository error when persistence fails.
    pub async fn find_order(&self, id: OrderId) -> OrderIntakeResult<Order> {
        let order = self.repository.find_by_id(id).await?;
        order.ok_or(OrderIntakeError::NotFound(id))
    }
}
