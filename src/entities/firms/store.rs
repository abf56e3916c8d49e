use super::model::Firm;
use crate::core::StoreResult;
use async_trait::async_trait;

#[async_trait]
pub trait FirmStore: Send + Sync {
    async fn create_firm(&self, name: &str) -> StoreResult<Firm>;

    async fn get_firm(&self, id: i64) -> StoreResult<Option<Firm>>;

    async fn list_firms(&self) -> StoreResult<Vec<Firm>>;

    async fn update_firm(&self, id: i64, name: &str) -> StoreResult<Option<Firm>>;

    async fn delete_firm(&self, id: i64) -> StoreResult<bool>;
}
