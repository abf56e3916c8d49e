use super::model::{Category, CategoryInput};
use crate::core::StoreResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn create_category(&self, input: CategoryInput) -> StoreResult<Category>;

    async fn get_category(&self, id: i64) -> StoreResult<Option<Category>>;

    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    /// Replaces both name and image
    async fn update_category(&self, id: i64, input: CategoryInput)
    -> StoreResult<Option<Category>>;

    async fn delete_category(&self, id: i64) -> StoreResult<bool>;

    async fn set_category_image(&self, id: i64, image: &str) -> StoreResult<Option<Category>>;

    async fn remove_category_image(&self, id: i64) -> StoreResult<Option<Category>>;
}
