//! Shared test harness for storage backend testing
//!
//! Provides request builders and assertion helpers, plus two macros that
//! generate a conformance suite for any backend:
//!
//! - `shop_store_tests!`: every store contract, called directly
//! - `rest_api_tests!`: HTTP round-trips through the full router
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod store_harness;
//! use store_harness::*;
//!
//! shop_store_tests!(InMemoryStore::new());
//! rest_api_tests!(InMemoryStore::new());
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod store_tests;
#[macro_use]
pub mod rest_tests;

use shop::entities::orders::{NewOrder, OrderItem};
use shop::entities::prices::NewPrice;
use shop::entities::products::NewProduct;
use shop::entities::users::NewUser;

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

pub fn new_user(telegram_id: i64, username: &str) -> NewUser {
    NewUser {
        telegram_id,
        username: username.to_string(),
    }
}

/// A product with empty attributes and no images.
pub fn new_product(name: &str, stock: i32) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        firm_id: 1,
        description: format!("{} description", name),
        category_id: 1,
        attributes: Default::default(),
        sell_count: 0,
        stock,
        image: vec![],
    }
}

pub fn new_price(product_id: i64, count: i32, price: f64) -> NewPrice {
    NewPrice {
        product_id,
        count,
        price,
    }
}

/// `items` are `(product_id, quantity)` pairs.
pub fn new_order(user_id: i64, items: &[(i64, i32)]) -> NewOrder {
    NewOrder {
        user_id,
        items: items
            .iter()
            .map(|&(product_id, quantity)| OrderItem {
                product_id,
                quantity,
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Assertions
// ---------------------------------------------------------------------------

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "Expected {}, got {}",
        expected,
        actual
    );
}

/// Assert that a list contains exactly `n` items.
pub fn assert_count<T>(list: &[T], expected: usize) {
    assert_eq!(
        list.len(),
        expected,
        "Expected {} items, got {}",
        expected,
        list.len()
    );
}

/// Assert the envelope tag of a JSON response body.
pub fn assert_status_tag(body: &serde_json::Value, expected: &str) {
    assert_eq!(
        body["status"], expected,
        "Expected status tag '{}', got body {}",
        expected, body
    );
}
