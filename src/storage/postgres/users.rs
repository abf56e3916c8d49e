use super::PostgresStore;
use crate::core::StoreResult;
use crate::entities::users::{NewUser, User, UserStore};
use async_trait::async_trait;

#[async_trait]
impl UserStore for PostgresStore {
    async fn create_user(&self, input: NewUser) -> StoreResult<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (telegram_id, username) VALUES ($1, $2) RETURNING *",
        )
        .bind(input.telegram_id)
        .bind(&input.username)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn get_user(&self, telegram_id: i64) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE telegram_id = $1")
            .bind(telegram_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE username = $1 ORDER BY id LIMIT 1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn update_username(
        &self,
        telegram_id: i64,
        username: &str,
    ) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET username = $2 WHERE telegram_id = $1 RETURNING *",
        )
        .bind(telegram_id)
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn delete_user(&self, telegram_id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE telegram_id = $1")
            .bind(telegram_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
