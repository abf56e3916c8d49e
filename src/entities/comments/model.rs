use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Comment {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Body of the add and edit endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct CommentInput {
    pub comment: String,
}
