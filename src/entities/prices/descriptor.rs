//! Entity descriptor for prices

use super::handlers::{
    PriceAppState, create_price, delete_price, delete_prices_for_product, get_price,
    list_prices_for_product, update_price, update_price_count,
};
use super::store::PriceStore;
use crate::server::EntityDescriptor;
use axum::{
    Router,
    routing::{get, patch, post},
};
use std::sync::Arc;

pub struct PriceDescriptor {
    pub store: Arc<dyn PriceStore>,
}

impl PriceDescriptor {
    pub fn new(store: Arc<dyn PriceStore>) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for PriceDescriptor {
    fn entity_type(&self) -> &str {
        "price"
    }

    fn plural(&self) -> &str {
        "prices"
    }

    fn build_routes(&self) -> Router {
        let state = PriceAppState {
            store: self.store.clone(),
        };

        Router::new()
            .route("/prices", post(create_price))
            .route(
                "/prices/{id}",
                get(get_price).put(update_price).delete(delete_price),
            )
            .route("/prices/{id}/count", patch(update_price_count))
            .route(
                "/prices/product/{product_id}",
                get(list_prices_for_product).delete(delete_prices_for_product),
            )
            .with_state(state)
    }
}
