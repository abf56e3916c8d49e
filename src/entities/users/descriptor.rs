//! Entity descriptor for users

use super::handlers::{
    UserAppState, create_user, delete_user, get_user, get_user_by_username, list_users,
    update_user,
};
use super::store::UserStore;
use crate::server::EntityDescriptor;
use axum::{Router, routing::get};
use std::sync::Arc;

pub struct UserDescriptor {
    pub store: Arc<dyn UserStore>,
}

impl UserDescriptor {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for UserDescriptor {
    fn entity_type(&self) -> &str {
        "user"
    }

    fn plural(&self) -> &str {
        "users"
    }

    fn build_routes(&self) -> Router {
        let state = UserAppState {
            store: self.store.clone(),
        };

        Router::new()
            .route("/users", get(list_users).post(create_user))
            .route(
                "/users/{telegram_id}",
                get(get_user).put(update_user).delete(delete_user),
            )
            .route("/users/username/{username}", get(get_user_by_username))
            .with_state(state)
    }
}
