use super::PostgresStore;
use crate::core::StoreResult;
use crate::entities::firms::{Firm, FirmStore};
use async_trait::async_trait;

#[async_trait]
impl FirmStore for PostgresStore {
    async fn create_firm(&self, name: &str) -> StoreResult<Firm> {
        let firm = sqlx::query_as::<_, Firm>("INSERT INTO firms (name) VALUES ($1) RETURNING *")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(firm)
    }

    async fn get_firm(&self, id: i64) -> StoreResult<Option<Firm>> {
        let firm = sqlx::query_as::<_, Firm>("SELECT * FROM firms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(firm)
    }

    async fn list_firms(&self) -> StoreResult<Vec<Firm>> {
        let firms = sqlx::query_as::<_, Firm>("SELECT * FROM firms ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(firms)
    }

    async fn update_firm(&self, id: i64, name: &str) -> StoreResult<Option<Firm>> {
        let firm =
            sqlx::query_as::<_, Firm>("UPDATE firms SET name = $2 WHERE id = $1 RETURNING *")
                .bind(id)
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;
        Ok(firm)
    }

    async fn delete_firm(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM firms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
