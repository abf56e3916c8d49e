use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Price {
    pub id: i64,
    pub product_id: i64,
    pub count: i32,
    pub price: f64,
}

/// Body of `POST /prices`
#[derive(Debug, Clone, Deserialize)]
pub struct NewPrice {
    pub product_id: i64,
    pub count: i32,
    pub price: f64,
}

/// Body of `PUT /prices/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePrice {
    pub count: i32,
    pub price: f64,
}

/// Body of `PATCH /prices/{id}/count`
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePriceCount {
    pub new_count: i32,
}

pub(crate) fn is_valid(count: i32, price: f64) -> bool {
    count >= 0 && price.is_finite() && price >= 0.0
}
