use super::PostgresStore;
use crate::core::StoreResult;
use crate::entities::comments::{Comment, CommentStore};
use async_trait::async_trait;

const OLDEST_COMMENT: &str =
    "SELECT id FROM comments WHERE user_id = $1 AND product_id = $2 ORDER BY id LIMIT 1";

#[async_trait]
impl CommentStore for PostgresStore {
    async fn add_comment(&self, user_id: i64, product_id: i64, text: &str) -> StoreResult<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (user_id, product_id, comment) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(text)
        .fetch_one(&self.pool)
        .await?;
        Ok(comment)
    }

    async fn edit_comment(
        &self,
        user_id: i64,
        product_id: i64,
        text: &str,
    ) -> StoreResult<Option<Comment>> {
        let sql = format!(
            "UPDATE comments SET comment = $3 WHERE id = ({}) RETURNING *",
            OLDEST_COMMENT
        );
        let comment = sqlx::query_as::<_, Comment>(&sql)
            .bind(user_id)
            .bind(product_id)
            .bind(text)
            .fetch_optional(&self.pool)
            .await?;
        Ok(comment)
    }

    async fn delete_comment(&self, user_id: i64, product_id: i64) -> StoreResult<bool> {
        let sql = format!("DELETE FROM comments WHERE id = ({})", OLDEST_COMMENT);
        let result = sqlx::query(&sql)
            .bind(user_id)
            .bind(product_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_product_comments(&self, product_id: i64) -> StoreResult<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT * FROM comments WHERE product_id = $1 ORDER BY id",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(comments)
    }

    async fn list_user_comments(&self, user_id: i64) -> StoreResult<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT * FROM comments WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(comments)
    }
}
