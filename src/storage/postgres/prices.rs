use super::PostgresStore;
use crate::core::StoreResult;
use crate::entities::prices::{NewPrice, Price, PriceStore, UpdatePrice};
use async_trait::async_trait;

#[async_trait]
impl PriceStore for PostgresStore {
    async fn create_price(&self, input: NewPrice) -> StoreResult<Price> {
        let price = sqlx::query_as::<_, Price>(
            "INSERT INTO prices (product_id, count, price) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(input.product_id)
        .bind(input.count)
        .bind(input.price)
        .fetch_one(&self.pool)
        .await?;
        Ok(price)
    }

    async fn get_price(&self, id: i64) -> StoreResult<Option<Price>> {
        let price = sqlx::query_as::<_, Price>("SELECT * FROM prices WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(price)
    }

    async fn list_prices_for_product(&self, product_id: i64) -> StoreResult<Vec<Price>> {
        let prices = sqlx::query_as::<_, Price>(
            "SELECT * FROM prices WHERE product_id = $1 ORDER BY id",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(prices)
    }

    async fn update_price(&self, id: i64, input: UpdatePrice) -> StoreResult<Option<Price>> {
        let price = sqlx::query_as::<_, Price>(
            "UPDATE prices SET count = $2, price = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(input.count)
        .bind(input.price)
        .fetch_optional(&self.pool)
        .await?;
        Ok(price)
    }

    async fn update_price_count(&self, id: i64, count: i32) -> StoreResult<Option<Price>> {
        let price =
            sqlx::query_as::<_, Price>("UPDATE prices SET count = $2 WHERE id = $1 RETURNING *")
                .bind(id)
                .bind(count)
                .fetch_optional(&self.pool)
                .await?;
        Ok(price)
    }

    async fn delete_price(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM prices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_prices_for_product(&self, product_id: i64) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM prices WHERE product_id = $1")
            .bind(product_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
