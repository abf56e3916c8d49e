//! Entity descriptor for products

use super::handlers::{
    ProductAppState, add_product_image, create_product, delete_product, get_product,
    increment_sell_count, list_products, remove_product_image, set_product_images,
    update_product, update_stock,
};
use super::store::ProductStore;
use crate::server::EntityDescriptor;
use axum::{
    Router,
    routing::{get, patch, put},
};
use std::sync::Arc;

pub struct ProductDescriptor {
    pub store: Arc<dyn ProductStore>,
}

impl ProductDescriptor {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for ProductDescriptor {
    fn entity_type(&self) -> &str {
        "product"
    }

    fn plural(&self) -> &str {
        "products"
    }

    fn build_routes(&self) -> Router {
        let state = ProductAppState {
            store: self.store.clone(),
        };

        Router::new()
            .route("/products", get(list_products).post(create_product))
            .route(
                "/products/{id}",
                get(get_product).put(update_product).delete(delete_product),
            )
            .route(
                "/products/{id}/image",
                put(add_product_image).delete(remove_product_image),
            )
            .route("/products/{id}/images", put(set_product_images))
            .route("/products/{id}/sell", patch(increment_sell_count))
            .route("/products/{id}/stock", patch(update_stock))
            .with_state(state)
    }
}
