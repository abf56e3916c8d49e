use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One product line in a user's basket; unique per (user, product)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct BasketItem {
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub added_at: DateTime<Utc>,
}

/// Body of `POST /basket` and `PUT /basket`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BasketEntry {
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i32,
}
