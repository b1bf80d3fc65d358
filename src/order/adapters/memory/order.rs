//! In-memory repository for order intake tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::order::{
    domain::{Order, OrderId},
    ports::{OrderRepository, OrderRepositoryError, OrderRepositoryResult},
};

/// Thread-safe in-memory order repository.
///
/// Enforces order-number uniqueness through a secondary index, matching
/// the unique constraint the `PostgreSQL` adapter relies on.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    state: Arc<RwLock<InMemoryOrderState>>,
}

#[derive(Debug, Default)]
struct InMemoryOrderState {
    orders: HashMap<OrderId, Order>,
    number_index: HashMap<String, OrderId>,
}

impl InMemoryOrderRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn store(&self, order: &Order) -> OrderRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            OrderRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.orders.contains_key(&order.id()) {
            return Err(OrderRepositoryError::DuplicateOrder(order.id()));
        }
        let number_key = order.order_number().as_str().to_owned();
        if state.number_index.contains_key(&number_key) {
            return Err(OrderRepositoryError::DuplicateOrderNumber(
                order.order_number().clone(),
            ));
        }

        state.number_index.insert(number_key, order.id());
        state.orders.insert(order.id(), order.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: OrderId) -> OrderRepositoryResult<Option<Order>> {
        let state = self.state.read().map_err(|err| {
            OrderRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.orders.get(&id).cloned())
    }

    async fn list_all(&self) -> OrderRepositoryResult<Vec<Order>> {
        let state = self.state.read().map_err(|err| {
            OrderRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut orders: Vec<Order> = state.orders.values().cloned().collect();
        orders.sort_by(|a, b| b.order_date().cmp(&a.order_date()));
        Ok(orders)
    }
}
