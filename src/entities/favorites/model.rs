use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Favorite {
    pub user_id: i64,
    pub product_id: i64,
    pub added_at: DateTime<Utc>,
}

/// Body of `POST /favorites`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FavoriteInput {
    pub user_id: i64,
    pub product_id: i64,
}

/// Payload of the membership check
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoriteCheck {
    pub exists: bool,
}
