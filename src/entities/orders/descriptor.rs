//! Entity descriptor for orders

use super::handlers::{OrderAppState, create_order, get_all_orders, get_order, get_user_orders};
use super::service::OrderService;
use crate::server::EntityDescriptor;
use axum::{
    Router,
    routing::{get, post},
};

pub struct OrderDescriptor {
    pub service: OrderService,
}

impl OrderDescriptor {
    pub fn new(service: OrderService) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn entity_type(&self) -> &str {
        "order"
    }

    fn plural(&self) -> &str {
        "orders"
    }

    fn build_routes(&self) -> Router {
        let state = OrderAppState {
            service: self.service.clone(),
        };

        // `/orders/all` is a static segment and wins over `/orders/{id}`
        Router::new()
            .route("/orders", post(create_order))
            .route("/orders/all", get(get_all_orders))
            .route("/orders/user/{user_id}", get(get_user_orders))
            .route("/orders/{id}", get(get_order))
            .with_state(state)
    }
}
