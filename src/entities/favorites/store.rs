use super::model::Favorite;
use crate::core::StoreResult;
use async_trait::async_trait;

#[async_trait]
pub trait FavoriteStore: Send + Sync {
    /// Idempotent: adding an existing favorite returns the stored one
    async fn add_favorite(&self, user_id: i64, product_id: i64) -> StoreResult<Favorite>;

    async fn list_favorites(&self, user_id: i64) -> StoreResult<Vec<Favorite>>;

    async fn is_favorite(&self, user_id: i64, product_id: i64) -> StoreResult<bool>;

    async fn remove_favorite(&self, user_id: i64, product_id: i64) -> StoreResult<bool>;
}
