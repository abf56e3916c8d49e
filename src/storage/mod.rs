//! Storage implementations for different backends
//!
//! Every backend implements all resource store traits on one type. The
//! [`Stores`] bundle hands each resource its own `Arc<dyn …Store>` so that
//! handlers, services and tests can mix backends (or mocks) per resource.

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::InMemoryStore;
#[cfg(feature = "postgres")]
pub use postgres::PostgresStore;

use crate::entities::avg_marks::AvgMarkStore;
use crate::entities::basket::BasketStore;
use crate::entities::categories::CategoryStore;
use crate::entities::comments::CommentStore;
use crate::entities::favorites::FavoriteStore;
use crate::entities::firms::FirmStore;
use crate::entities::marks::MarkStore;
use crate::entities::orders::OrderStore;
use crate::entities::prices::PriceStore;
use crate::entities::products::ProductStore;
use crate::entities::users::UserStore;
use std::sync::Arc;

/// A backend that can serve every resource.
pub trait ShopBackend:
    UserStore
    + ProductStore
    + CategoryStore
    + FirmStore
    + PriceStore
    + BasketStore
    + FavoriteStore
    + OrderStore
    + MarkStore
    + AvgMarkStore
    + CommentStore
    + 'static
{
}

impl<T> ShopBackend for T where
    T: UserStore
        + ProductStore
        + CategoryStore
        + FirmStore
        + PriceStore
        + BasketStore
        + FavoriteStore
        + OrderStore
        + MarkStore
        + AvgMarkStore
        + CommentStore
        + 'static
{
}

/// One store handle per resource
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub products: Arc<dyn ProductStore>,
    pub categories: Arc<dyn CategoryStore>,
    pub firms: Arc<dyn FirmStore>,
    pub prices: Arc<dyn PriceStore>,
    pub basket: Arc<dyn BasketStore>,
    pub favorites: Arc<dyn FavoriteStore>,
    pub orders: Arc<dyn OrderStore>,
    pub marks: Arc<dyn MarkStore>,
    pub avg_marks: Arc<dyn AvgMarkStore>,
    pub comments: Arc<dyn CommentStore>,
}

impl Stores {
    /// Share a single backend between all resources
    pub fn from_backend<B: ShopBackend>(backend: B) -> Self {
        let backend = Arc::new(backend);
        Self {
            users: backend.clone(),
            products: backend.clone(),
            categories: backend.clone(),
            firms: backend.clone(),
            prices: backend.clone(),
            basket: backend.clone(),
            favorites: backend.clone(),
            orders: backend.clone(),
            marks: backend.clone(),
            avg_marks: backend.clone(),
            comments: backend,
        }
    }

    pub fn in_memory() -> Self {
        Self::from_backend(InMemoryStore::new())
    }
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores").finish_non_exhaustive()
    }
}
