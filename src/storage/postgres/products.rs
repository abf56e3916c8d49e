use super::PostgresStore;
use crate::core::StoreResult;
use crate::entities::products::{NewProduct, Product, ProductStore, UpdateProduct};
use async_trait::async_trait;
use sqlx::types::Json;

#[async_trait]
impl ProductStore for PostgresStore {
    async fn create_product(&self, input: NewProduct) -> StoreResult<Product> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products \
             (name, firm_id, description, category_id, attributes, sell_count, stock, image) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&input.name)
        .bind(input.firm_id)
        .bind(&input.description)
        .bind(input.category_id)
        .bind(Json(&input.attributes))
        .bind(input.sell_count)
        .bind(input.stock)
        .bind(&input.image)
        .fetch_one(&self.pool)
        .await?;
        Ok(product)
    }

    async fn get_product(&self, id: i64) -> StoreResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    async fn list_products(&self) -> StoreResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    async fn update_product(&self, id: i64, input: UpdateProduct) -> StoreResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "UPDATE products SET name = $2, firm_id = $3, description = $4, category_id = $5, \
             attributes = $6, stock = $7, image = $8 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.firm_id)
        .bind(&input.description)
        .bind(input.category_id)
        .bind(Json(&input.attributes))
        .bind(input.stock)
        .bind(&input.image)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    async fn delete_product(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn add_product_image(&self, id: i64, image: &str) -> StoreResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "UPDATE products SET image = array_append(image, $2) WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(image)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    async fn remove_product_image(&self, id: i64, image: &str) -> StoreResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "UPDATE products SET image = array_remove(image, $2) WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(image)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    async fn set_product_images(
        &self,
        id: i64,
        images: Vec<String>,
    ) -> StoreResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "UPDATE products SET image = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&images)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    async fn increment_sell_count(&self, id: i64, count: i32) -> StoreResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "UPDATE products SET sell_count = sell_count + $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(count)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    async fn update_stock(&self, id: i64, stock: i32) -> StoreResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "UPDATE products SET stock = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(stock)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }
}
