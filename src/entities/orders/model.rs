//! Order model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status every order starts with
pub const STATUS_PENDING: &str = "pending";

/// An order header with its lines.
///
/// Lines are serialized under `products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "products", default)]
    pub lines: Vec<OrderLine>,
}

/// One product of an order, priced when the order was placed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct OrderLine {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    /// Unit price
    pub price: f64,
}

/// Requested product and quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: i64,
    pub quantity: i32,
}

/// Body of `POST /orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub user_id: i64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.price * f64::from(line.quantity))
            .sum()
    }
}
