//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub telegram_id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /users`
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub telegram_id: i64,
    pub username: String,
}

/// Body of `PUT /users/{telegram_id}`
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub username: String,
}
