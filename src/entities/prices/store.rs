use super::model::{NewPrice, Price, UpdatePrice};
use crate::core::StoreResult;
use async_trait::async_trait;

#[async_trait]
pub trait PriceStore: Send + Sync {
    async fn create_price(&self, input: NewPrice) -> StoreResult<Price>;

    async fn get_price(&self, id: i64) -> StoreResult<Option<Price>>;

    /// Ordered by price id
    async fn list_prices_for_product(&self, product_id: i64) -> StoreResult<Vec<Price>>;

    async fn update_price(&self, id: i64, input: UpdatePrice) -> StoreResult<Option<Price>>;

    async fn update_price_count(&self, id: i64, count: i32) -> StoreResult<Option<Price>>;

    async fn delete_price(&self, id: i64) -> StoreResult<bool>;

    /// Returns the number of rows removed
    async fn delete_prices_for_product(&self, product_id: i64) -> StoreResult<u64>;
}
