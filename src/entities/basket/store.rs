use super::model::{BasketEntry, BasketItem};
use crate::core::StoreResult;
use async_trait::async_trait;

#[async_trait]
pub trait BasketStore: Send + Sync {
    /// Adds the product; if it is already in the basket the quantities are
    /// summed.
    async fn add_basket_item(&self, entry: BasketEntry) -> StoreResult<BasketItem>;

    /// Items in the order they were first added
    async fn list_basket(&self, user_id: i64) -> StoreResult<Vec<BasketItem>>;

    /// Sets the quantity of an existing item
    async fn update_basket_item(&self, entry: BasketEntry) -> StoreResult<Option<BasketItem>>;

    async fn remove_basket_item(&self, user_id: i64, product_id: i64) -> StoreResult<bool>;

    async fn clear_basket(&self, user_id: i64) -> StoreResult<u64>;
}
