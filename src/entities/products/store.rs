use super::model::{NewProduct, Product, UpdateProduct};
use crate::core::StoreResult;
use async_trait::async_trait;

/// Storage for products.
///
/// Every mutation returns the product as stored afterwards, or `None` when
/// the id is unknown.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn create_product(&self, input: NewProduct) -> StoreResult<Product>;

    async fn get_product(&self, id: i64) -> StoreResult<Option<Product>>;

    async fn list_products(&self) -> StoreResult<Vec<Product>>;

    async fn update_product(&self, id: i64, input: UpdateProduct) -> StoreResult<Option<Product>>;

    async fn delete_product(&self, id: i64) -> StoreResult<bool>;

    /// Appends to the gallery
    async fn add_product_image(&self, id: i64, image: &str) -> StoreResult<Option<Product>>;

    /// Removes every occurrence of `image`
    async fn remove_product_image(&self, id: i64, image: &str) -> StoreResult<Option<Product>>;

    async fn set_product_images(&self, id: i64, images: Vec<String>)
    -> StoreResult<Option<Product>>;

    async fn increment_sell_count(&self, id: i64, count: i32) -> StoreResult<Option<Product>>;

    async fn update_stock(&self, id: i64, stock: i32) -> StoreResult<Option<Product>>;
}
