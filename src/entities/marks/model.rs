use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Mark {
    pub user_id: i64,
    pub product_id: i64,
    pub mark: f64,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /marks/user/{user_id}/product/{product_id}`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MarkInput {
    pub mark: f64,
}
