//! Entity descriptor for comments

use super::handlers::{
    CommentAppState, add_comment, delete_comment, edit_comment, get_comments_by_product,
    get_comments_by_user,
};
use super::store::CommentStore;
use crate::server::EntityDescriptor;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

pub struct CommentDescriptor {
    pub store: Arc<dyn CommentStore>,
}

impl CommentDescriptor {
    pub fn new(store: Arc<dyn CommentStore>) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for CommentDescriptor {
    fn entity_type(&self) -> &str {
        "comment"
    }

    fn plural(&self) -> &str {
        "comments"
    }

    fn build_routes(&self) -> Router {
        let state = CommentAppState {
            store: self.store.clone(),
        };

        Router::new()
            .route(
                "/comments/user/{user_id}/product/{product_id}",
                post(add_comment).put(edit_comment).delete(delete_comment),
            )
            .route("/comments/product/{product_id}", get(get_comments_by_product))
            .route("/comments/user/{user_id}", get(get_comments_by_user))
            .with_state(state)
    }
}
