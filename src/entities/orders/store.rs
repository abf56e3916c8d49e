use super::model::{NewOrder, Order};
use crate::core::StoreResult;
use async_trait::async_trait;

/// Storage for orders.
///
/// `create_order` is all-or-nothing: the order row and every line are
/// persisted together or not at all. Each line's unit price is taken from
/// the product's first price row (lowest id) at placement time; a product
/// without any price fails the whole order with
/// [`StoreError::Invalid`](crate::core::StoreError::Invalid).
///
/// Listings are newest first; lines within an order are ordered by line id.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn create_order(&self, input: NewOrder) -> StoreResult<Order>;

    async fn get_order(&self, id: i64) -> StoreResult<Option<Order>>;

    async fn list_user_orders(&self, user_id: i64) -> StoreResult<Vec<Order>>;

    async fn list_orders(&self) -> StoreResult<Vec<Order>>;
}
