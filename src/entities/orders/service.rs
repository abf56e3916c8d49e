//! Order placement

use super::model::{NewOrder, Order};
use super::store::OrderStore;
use crate::core::{StoreError, StoreResult};
use std::sync::Arc;

/// Validates order requests before handing them to the transactional store
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn OrderStore> {
        &self.store
    }

    /// Place an order. Either the order and all of its lines are stored, or
    /// nothing is.
    pub async fn place(&self, input: NewOrder) -> StoreResult<Order> {
        validate(&input)?;

        let user_id = input.user_id;
        tracing::debug!(user_id, items = input.items.len(), "placing order");
        let order = self.store.create_order(input).await?;

        tracing::info!(
            order_id = order.id,
            user_id,
            lines = order.lines.len(),
            total = order.total(),
            "order placed"
        );
        Ok(order)
    }
}

fn validate(input: &NewOrder) -> StoreResult<()> {
    if let Some(item) = input.items.iter().find(|item| item.quantity <= 0) {
        return Err(StoreError::Invalid(format!(
            "quantity for product {} must be positive, got {}",
            item.product_id, item.quantity
        )));
    }
    Ok(())
}
