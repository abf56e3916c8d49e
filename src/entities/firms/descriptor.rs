//! Entity descriptor for firms

use super::handlers::{
    FirmAppState, create_firm, delete_firm, get_firm, list_firms, update_firm,
};
use super::store::FirmStore;
use crate::server::EntityDescriptor;
use axum::{Router, routing::get};
use std::sync::Arc;

pub struct FirmDescriptor {
    pub store: Arc<dyn FirmStore>,
}

impl FirmDescriptor {
    pub fn new(store: Arc<dyn FirmStore>) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for FirmDescriptor {
    fn entity_type(&self) -> &str {
        "firm"
    }

    fn plural(&self) -> &str {
        "firms"
    }

    fn build_routes(&self) -> Router {
        let state = FirmAppState {
            store: self.store.clone(),
        };

        Router::new()
            .route("/firms", get(list_firms).post(create_firm))
            .route(
                "/firms/{id}",
                get(get_firm).put(update_firm).delete(delete_firm),
            )
            .with_state(state)
    }
}
