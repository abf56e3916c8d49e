use super::model::Comment;
use crate::core::StoreResult;
use async_trait::async_trait;

/// Storage for comments.
///
/// A user may comment on a product several times. Edit and delete address
/// the user's oldest comment on that product (lowest id).
#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn add_comment(&self, user_id: i64, product_id: i64, text: &str) -> StoreResult<Comment>;

    async fn edit_comment(
        &self,
        user_id: i64,
        product_id: i64,
        text: &str,
    ) -> StoreResult<Option<Comment>>;

    async fn delete_comment(&self, user_id: i64, product_id: i64) -> StoreResult<bool>;

    /// Ordered by comment id
    async fn list_product_comments(&self, product_id: i64) -> StoreResult<Vec<Comment>>;

    /// Ordered by comment id
    async fn list_user_comments(&self, user_id: i64) -> StoreResult<Vec<Comment>>;
}
