use super::PostgresStore;
use crate::core::StoreResult;
use crate::entities::categories::{Category, CategoryInput, CategoryStore};
use async_trait::async_trait;

#[async_trait]
impl CategoryStore for PostgresStore {
    async fn create_category(&self, input: CategoryInput) -> StoreResult<Category> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name, image) VALUES ($1, $2) RETURNING *",
        )
        .bind(&input.name)
        .bind(&input.image)
        .fetch_one(&self.pool)
        .await?;
        Ok(category)
    }

    async fn get_category(&self, id: i64) -> StoreResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(category)
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(categories)
    }

    async fn update_category(
        &self,
        id: i64,
        input: CategoryInput,
    ) -> StoreResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = $2, image = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.image)
        .fetch_optional(&self.pool)
        .await?;
        Ok(category)
    }

    async fn delete_category(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn set_category_image(&self, id: i64, image: &str) -> StoreResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "UPDATE categories SET image = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(image)
        .fetch_optional(&self.pool)
        .await?;
        Ok(category)
    }

    async fn remove_category_image(&self, id: i64) -> StoreResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "UPDATE categories SET image = NULL WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(category)
    }
}
