use super::PostgresStore;
use crate::core::StoreResult;
use crate::entities::avg_marks::{AvgMark, AvgMarkStore};
use crate::entities::marks::{Mark, MarkStore};
use async_trait::async_trait;

#[async_trait]
impl MarkStore for PostgresStore {
    async fn upsert_mark(&self, user_id: i64, product_id: i64, value: f64) -> StoreResult<Mark> {
        let mark = sqlx::query_as::<_, Mark>(
            "INSERT INTO marks (user_id, product_id, mark) VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, product_id) \
             DO UPDATE SET mark = EXCLUDED.mark, created_at = NOW() \
             RETURNING *",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(value)
        .fetch_one(&self.pool)
        .await?;
        Ok(mark)
    }

    async fn get_mark(&self, user_id: i64, product_id: i64) -> StoreResult<Option<Mark>> {
        let mark = sqlx::query_as::<_, Mark>(
            "SELECT * FROM marks WHERE user_id = $1 AND product_id = $2",
        )
        .bind(user_id)
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(mark)
    }

    async fn list_user_marks(&self, user_id: i64) -> StoreResult<Vec<Mark>> {
        let marks = sqlx::query_as::<_, Mark>(
            "SELECT * FROM marks WHERE user_id = $1 ORDER BY created_at, product_id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(marks)
    }

    async fn list_product_marks(&self, product_id: i64) -> StoreResult<Vec<Mark>> {
        let marks = sqlx::query_as::<_, Mark>(
            "SELECT * FROM marks WHERE product_id = $1 ORDER BY created_at, user_id",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(marks)
    }

    async fn delete_mark(&self, user_id: i64, product_id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM marks WHERE user_id = $1 AND product_id = $2")
            .bind(user_id)
            .bind(product_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl AvgMarkStore for PostgresStore {
    async fn get_avg_mark(&self, product_id: i64) -> StoreResult<Option<AvgMark>> {
        let avg = sqlx::query_as::<_, AvgMark>("SELECT * FROM avg_marks WHERE product_id = $1")
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(avg)
    }

    async fn list_avg_marks(&self) -> StoreResult<Vec<AvgMark>> {
        let avgs = sqlx::query_as::<_, AvgMark>("SELECT * FROM avg_marks ORDER BY product_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(avgs)
    }

    async fn upsert_avg_mark(
        &self,
        product_id: i64,
        sum: f64,
        count: i64,
    ) -> StoreResult<AvgMark> {
        let avg = sqlx::query_as::<_, AvgMark>(
            "INSERT INTO avg_marks (product_id, sum, count, updated_at) VALUES ($1, $2, $3, NOW()) \
             ON CONFLICT (product_id) \
             DO UPDATE SET sum = EXCLUDED.sum, count = EXCLUDED.count, updated_at = NOW() \
             RETURNING *",
        )
        .bind(product_id)
        .bind(sum)
        .bind(count)
        .fetch_one(&self.pool)
        .await?;
        Ok(avg)
    }

    async fn delete_avg_mark(&self, product_id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM avg_marks WHERE product_id = $1")
            .bind(product_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
