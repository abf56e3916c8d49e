use super::model::AvgMark;
use crate::core::StoreResult;
use async_trait::async_trait;

/// Storage for aggregates. Only [`AvgMarkService`](super::AvgMarkService)
/// writes through this trait.
#[async_trait]
pub trait AvgMarkStore: Send + Sync {
    async fn get_avg_mark(&self, product_id: i64) -> StoreResult<Option<AvgMark>>;

    /// Ordered by product id
    async fn list_avg_marks(&self) -> StoreResult<Vec<AvgMark>>;

    async fn upsert_avg_mark(&self, product_id: i64, sum: f64, count: i64)
    -> StoreResult<AvgMark>;

    async fn delete_avg_mark(&self, product_id: i64) -> StoreResult<bool>;
}
