//! Repository port for order persistence, lookup, and number uniqueness.

use crate::order::domain::{Order, OrderId, OrderNumber};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for order repository operations.
pub type OrderRepositoryResult<T> = Result<T, OrderRepositoryError>;

/// Order persistence contract.
///
/// Implementations enforce order-number uniqueness: the generated number
/// has second resolution, so two orders created within the same wall-clock
/// second collide and the second store must fail with
/// [`OrderRepositoryError::DuplicateOrderNumber`] rather than persist.
/// Order rows cascade when their recording employee row is deleted at the
/// storage boundary.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Stores a new order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderRepositoryError::DuplicateOrder`] when the order ID
    /// already exists or [`OrderRepositoryError::DuplicateOrderNumber`]
    /// when the generated number is already taken.
    async fn store(&self, order: &Order) -> OrderRepositoryResult<()>;

    /// Finds an order by identifier.
    ///
    /// Returns `None` when the order does not exist.
    async fn find_by_id(&self, id: OrderId) -> OrderRepositoryResult<Option<Order>>;

    /// Returns all orders, newest first.
    async fn list_all(&self) -> OrderRepositoryResult<Vec<Order>>;
}

/// Errors returned by order repository implementations.
#[derive(Debug, Clone, Error)]
pub enum OrderRepositoryError {
    /// An order with the same identifier already exists.
    #[error("duplicate order identifier: {0}")]
    DuplicateOrder(OrderId),

    /// An order with the same generated number already exists.
    #[error("duplicate order number: {0}")]
    DuplicateOrderNumber(OrderNumber),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl OrderRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
