use super::model::Mark;
use crate::core::StoreResult;
use async_trait::async_trait;

/// Storage for marks, keyed by (user, product).
#[async_trait]
pub trait MarkStore: Send + Sync {
    /// Insert or replace the user's mark for the product
    async fn upsert_mark(&self, user_id: i64, product_id: i64, value: f64) -> StoreResult<Mark>;

    async fn get_mark(&self, user_id: i64, product_id: i64) -> StoreResult<Option<Mark>>;

    async fn list_user_marks(&self, user_id: i64) -> StoreResult<Vec<Mark>>;

    async fn list_product_marks(&self, product_id: i64) -> StoreResult<Vec<Mark>>;

    async fn delete_mark(&self, user_id: i64, product_id: i64) -> StoreResult<bool>;
}
