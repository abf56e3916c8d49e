//! User storage contract

use super::model::{NewUser, User};
use crate::core::StoreResult;
use async_trait::async_trait;

/// Storage for users.
///
/// `telegram_id` is unique; creating a second user with the same one is a
/// [`StoreError::Conflict`](crate::core::StoreError::Conflict).
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, input: NewUser) -> StoreResult<User>;

    async fn get_user(&self, telegram_id: i64) -> StoreResult<Option<User>>;

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    async fn list_users(&self) -> StoreResult<Vec<User>>;

    /// Returns `None` when no user has this Telegram id
    async fn update_username(&self, telegram_id: i64, username: &str)
    -> StoreResult<Option<User>>;

    /// Returns `false` when nothing was deleted
    async fn delete_user(&self, telegram_id: i64) -> StoreResult<bool>;
}
