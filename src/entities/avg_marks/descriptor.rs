//! Entity descriptor for average marks

use super::handlers::{AvgMarkAppState, get_all_avg_marks, get_avg_mark, recalculate_avg_mark};
use super::service::AvgMarkService;
use crate::server::EntityDescriptor;
use axum::{
    Router,
    routing::{get, post},
};

pub struct AvgMarkDescriptor {
    pub service: AvgMarkService,
}

impl AvgMarkDescriptor {
    pub fn new(service: AvgMarkService) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for AvgMarkDescriptor {
    fn entity_type(&self) -> &str {
        "avg_mark"
    }

    fn plural(&self) -> &str {
        "avg_marks"
    }

    fn build_routes(&self) -> Router {
        let state = AvgMarkAppState {
            service: self.service.clone(),
        };

        Router::new()
            .route("/avg_marks", get(get_all_avg_marks))
            .route("/avg_marks/product/{product_id}", get(get_avg_mark))
            .route(
                "/avg_marks/product/{product_id}/recalculate",
                post(recalculate_avg_mark),
            )
            .with_state(state)
    }
}
