//! Entity descriptor for the basket

use super::handlers::{
    BasketAppState, add_to_basket, clear_basket, get_user_basket, remove_from_basket,
    update_basket_item,
};
use super::store::BasketStore;
use crate::server::EntityDescriptor;
use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

pub struct BasketDescriptor {
    pub store: Arc<dyn BasketStore>,
}

impl BasketDescriptor {
    pub fn new(store: Arc<dyn BasketStore>) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for BasketDescriptor {
    fn entity_type(&self) -> &str {
        "basket_item"
    }

    fn plural(&self) -> &str {
        "basket"
    }

    fn build_routes(&self) -> Router {
        let state = BasketAppState {
            store: self.store.clone(),
        };

        Router::new()
            .route("/basket", post(add_to_basket).put(update_basket_item))
            .route(
                "/basket/{user_id}",
                get(get_user_basket).delete(clear_basket),
            )
            .route("/basket/{user_id}/{product_id}", delete(remove_from_basket))
            .with_state(state)
    }
}
