use super::PostgresStore;
use crate::core::StoreResult;
use crate::entities::favorites::{Favorite, FavoriteStore};
use async_trait::async_trait;

#[async_trait]
impl FavoriteStore for PostgresStore {
    async fn add_favorite(&self, user_id: i64, product_id: i64) -> StoreResult<Favorite> {
        sqlx::query(
            "INSERT INTO favorites (user_id, product_id) VALUES ($1, $2) \
             ON CONFLICT (user_id, product_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(product_id)
        .execute(&self.pool)
        .await?;

        let favorite = sqlx::query_as::<_, Favorite>(
            "SELECT * FROM favorites WHERE user_id = $1 AND product_id = $2",
        )
        .bind(user_id)
        .bind(product_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(favorite)
    }

    async fn list_favorites(&self, user_id: i64) -> StoreResult<Vec<Favorite>> {
        let favorites = sqlx::query_as::<_, Favorite>(
            "SELECT * FROM favorites WHERE user_id = $1 ORDER BY added_at, product_id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(favorites)
    }

    async fn is_favorite(&self, user_id: i64, product_id: i64) -> StoreResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM favorites WHERE user_id = $1 AND product_id = $2)",
        )
        .bind(user_id)
        .bind(product_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn remove_favorite(&self, user_id: i64, product_id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND product_id = $2")
            .bind(user_id)
            .bind(product_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
