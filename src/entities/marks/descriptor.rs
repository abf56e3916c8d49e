//! Entity descriptor for marks

use super::handlers::{MarkAppState, add_mark, delete_mark, get_product_user_mark, get_user_marks};
use super::store::MarkStore;
use crate::entities::avg_marks::AvgMarkService;
use crate::server::EntityDescriptor;
use axum::{Router, routing::get};
use std::sync::Arc;

pub struct MarkDescriptor {
    pub store: Arc<dyn MarkStore>,
    pub averages: AvgMarkService,
}

impl MarkDescriptor {
    pub fn new(store: Arc<dyn MarkStore>, averages: AvgMarkService) -> Self {
        Self { store, averages }
    }
}

impl EntityDescriptor for MarkDescriptor {
    fn entity_type(&self) -> &str {
        "mark"
    }

    fn plural(&self) -> &str {
        "marks"
    }

    fn build_routes(&self) -> Router {
        let state = MarkAppState {
            store: self.store.clone(),
            averages: self.averages.clone(),
        };

        Router::new()
            .route("/marks/user/{user_id}", get(get_user_marks))
            .route(
                "/marks/user/{user_id}/product/{product_id}",
                get(get_product_user_mark)
                    .post(add_mark)
                    .delete(delete_mark),
            )
            .with_state(state)
    }
}
