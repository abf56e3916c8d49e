//! Entity descriptor for categories

use super::handlers::{
    CategoryAppState, create_category, delete_category, get_category, list_categories,
    remove_category_image, set_category_image, update_category,
};
use super::store::CategoryStore;
use crate::server::EntityDescriptor;
use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

pub struct CategoryDescriptor {
    pub store: Arc<dyn CategoryStore>,
}

impl CategoryDescriptor {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for CategoryDescriptor {
    fn entity_type(&self) -> &str {
        "category"
    }

    fn plural(&self) -> &str {
        "categories"
    }

    fn build_routes(&self) -> Router {
        let state = CategoryAppState {
            store: self.store.clone(),
        };

        Router::new()
            .route("/categories", get(list_categories).post(create_category))
            .route(
                "/categories/{id}",
                get(get_category)
                    .put(update_category)
                    .delete(delete_category),
            )
            .route(
                "/categories/{id}/image",
                put(set_category_image).delete(remove_category_image),
            )
            .with_state(state)
    }
}
