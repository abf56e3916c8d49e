//! Orders with their lines
//!
//! A single order is read as header then lines. Listings join `orders` with
//! `order_products` once and regroup the rows; orders without lines come
//! back with an empty `products` list.

use super::PostgresStore;
use crate::core::{StoreError, StoreResult};
use crate::entities::orders::model::STATUS_PENDING;
use crate::entities::orders::{NewOrder, Order, OrderLine, OrderStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

const SELECT_ORDERS: &str = "SELECT o.id, o.user_id, o.status, o.created_at, \
     op.id AS line_id, op.product_id, op.quantity, op.price \
     FROM orders o LEFT JOIN order_products op ON op.order_id = o.id";

#[derive(sqlx::FromRow)]
struct OrderHeader {
    id: i64,
    user_id: i64,
    status: String,
    created_at: DateTime<Utc>,
}

impl OrderHeader {
    fn into_order(self, lines: Vec<OrderLine>) -> Order {
        Order {
            id: self.id,
            user_id: self.user_id,
            status: self.status,
            created_at: self.created_at,
            lines,
        }
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    #[sqlx(flatten)]
    header: OrderHeader,
    line_id: Option<i64>,
    product_id: Option<i64>,
    quantity: Option<i32>,
    price: Option<f64>,
}

/// Fold joined rows into orders, keeping the row order of the query.
fn group_rows(rows: Vec<OrderRow>) -> Vec<Order> {
    let mut orders: IndexMap<i64, Order> = IndexMap::new();
    for row in rows {
        let order_id = row.header.id;
        let line = match (row.line_id, row.product_id, row.quantity, row.price) {
            (Some(id), Some(product_id), Some(quantity), Some(price)) => Some(OrderLine {
                id,
                order_id,
                product_id,
                quantity,
                price,
            }),
            _ => None,
        };

        let order = orders
            .entry(order_id)
            .or_insert_with(|| row.header.into_order(Vec::new()));
        order.lines.extend(line);
    }
    orders.into_values().collect()
}

#[async_trait]
impl OrderStore for PostgresStore {
    async fn create_order(&self, input: NewOrder) -> StoreResult<Order> {
        let mut tx = self.pool.begin().await?;

        let header = sqlx::query_as::<_, OrderHeader>(
            "INSERT INTO orders (user_id, status) VALUES ($1, $2) \
             RETURNING id, user_id, status, created_at",
        )
        .bind(input.user_id)
        .bind(STATUS_PENDING)
        .fetch_one(&mut *tx)
        .await?;

        let mut lines = Vec::with_capacity(input.items.len());
        for item in &input.items {
            let price: Option<f64> = sqlx::query_scalar(
                "SELECT price FROM prices WHERE product_id = $1 ORDER BY id LIMIT 1",
            )
            .bind(item.product_id)
            .fetch_optional(&mut *tx)
            .await?;

            // Dropping `tx` without commit rolls the order back.
            let price = price.ok_or_else(|| {
                StoreError::Invalid(format!("product {} has no price", item.product_id))
            })?;

            let line = sqlx::query_as::<_, OrderLine>(
                "INSERT INTO order_products (order_id, product_id, quantity, price) \
                 VALUES ($1, $2, $3, $4) RETURNING id, order_id, product_id, quantity, price",
            )
            .bind(header.id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(price)
            .fetch_one(&mut *tx)
            .await?;
            lines.push(line);
        }

        tx.commit().await?;
        Ok(header.into_order(lines))
    }

    async fn get_order(&self, id: i64) -> StoreResult<Option<Order>> {
        let header = sqlx::query_as::<_, OrderHeader>(
            "SELECT id, user_id, status, created_at FROM orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(header) = header else {
            return Ok(None);
        };

        let lines = sqlx::query_as::<_, OrderLine>(
            "SELECT id, order_id, product_id, quantity, price FROM order_products \
             WHERE order_id = $1 ORDER BY id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(header.into_order(lines)))
    }

    async fn list_user_orders(&self, user_id: i64) -> StoreResult<Vec<Order>> {
        let sql = format!(
            "{} WHERE o.user_id = $1 ORDER BY o.created_at DESC, o.id DESC, op.id",
            SELECT_ORDERS
        );
        let rows = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(group_rows(rows))
    }

    async fn list_orders(&self) -> StoreResult<Vec<Order>> {
        let sql = format!(
            "{} ORDER BY o.created_at DESC, o.id DESC, op.id",
            SELECT_ORDERS
        );
        let rows = sqlx::query_as::<_, OrderRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(group_rows(rows))
    }
}
