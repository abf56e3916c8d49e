//! Entity descriptor for favorites

use super::handlers::{
    FavoriteAppState, add_to_favorites, check_favorite, get_user_favorites,
    remove_from_favorites,
};
use super::store::FavoriteStore;
use crate::server::EntityDescriptor;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

pub struct FavoriteDescriptor {
    pub store: Arc<dyn FavoriteStore>,
}

impl FavoriteDescriptor {
    pub fn new(store: Arc<dyn FavoriteStore>) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for FavoriteDescriptor {
    fn entity_type(&self) -> &str {
        "favorite"
    }

    fn plural(&self) -> &str {
        "favorites"
    }

    fn build_routes(&self) -> Router {
        let state = FavoriteAppState {
            store: self.store.clone(),
        };

        Router::new()
            .route("/favorites", post(add_to_favorites))
            .route("/favorites/{user_id}", get(get_user_favorites))
            .route(
                "/favorites/{user_id}/{product_id}",
                get(check_favorite).delete(remove_from_favorites),
            )
            .with_state(state)
    }
}
