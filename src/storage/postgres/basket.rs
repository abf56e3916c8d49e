use super::PostgresStore;
use crate::core::StoreResult;
use crate::entities::basket::{BasketEntry, BasketItem, BasketStore};
use async_trait::async_trait;

#[async_trait]
impl BasketStore for PostgresStore {
    async fn add_basket_item(&self, entry: BasketEntry) -> StoreResult<BasketItem> {
        let item = sqlx::query_as::<_, BasketItem>(
            "INSERT INTO basket (user_id, product_id, quantity) VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, product_id) \
             DO UPDATE SET quantity = basket.quantity + EXCLUDED.quantity \
             RETURNING *",
        )
        .bind(entry.user_id)
        .bind(entry.product_id)
        .bind(entry.quantity)
        .fetch_one(&self.pool)
        .await?;
        Ok(item)
    }

    async fn list_basket(&self, user_id: i64) -> StoreResult<Vec<BasketItem>> {
        let items = sqlx::query_as::<_, BasketItem>(
            "SELECT * FROM basket WHERE user_id = $1 ORDER BY added_at, product_id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn update_basket_item(&self, entry: BasketEntry) -> StoreResult<Option<BasketItem>> {
        let item = sqlx::query_as::<_, BasketItem>(
            "UPDATE basket SET quantity = $3 WHERE user_id = $1 AND product_id = $2 RETURNING *",
        )
        .bind(entry.user_id)
        .bind(entry.product_id)
        .bind(entry.quantity)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    async fn remove_basket_item(&self, user_id: i64, product_id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM basket WHERE user_id = $1 AND product_id = $2")
            .bind(user_id)
            .bind(product_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn clear_basket(&self, user_id: i64) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM basket WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
