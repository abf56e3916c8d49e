//! # Shop backend
//!
//! HTTP backend for a small shop: users, a product catalog with firms,
//! categories and prices, per-user baskets and favorites, orders, ratings
//! and comments.
//!
//! ## Layout
//!
//! - [`entities`]: one module per resource (model, store trait, handlers,
//!   route descriptor)
//! - [`storage`]: backends implementing every store trait (in-memory, and
//!   PostgreSQL behind the `postgres` feature)
//! - [`server`]: `ServerBuilder`, the resource registry and the REST
//!   exposure
//! - [`core`]: the response envelope, errors and extractors
//! - [`config`]: layered configuration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shop::prelude::*;
//!
//! ServerBuilder::new()
//!     .with_backend(InMemoryStore::new())
//!     .serve("0.0.0.0:8080")
//!     .await?;
//! ```
//!
//! Every response is `{"status": "<tag>", "data": ...}`; errors carry a
//! message string in `data`.

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    pub use crate::config::{AppConfig, StorageBackend};
    pub use crate::core::{
        ApiError, ApiResult, Envelope, JsonBody, Removed, StoreError, StoreResult, parse_id,
    };

    pub use crate::entities::avg_marks::{AvgMark, AvgMarkService, AvgMarkStore};
    pub use crate::entities::basket::{BasketEntry, BasketItem, BasketStore};
    pub use crate::entities::categories::{Category, CategoryInput, CategoryStore};
    pub use crate::entities::comments::{Comment, CommentStore};
    pub use crate::entities::favorites::{Favorite, FavoriteStore};
    pub use crate::entities::firms::{Firm, FirmStore};
    pub use crate::entities::marks::{Mark, MarkStore};
    pub use crate::entities::orders::{
        NewOrder, Order, OrderItem, OrderLine, OrderService, OrderStore,
    };
    pub use crate::entities::prices::{NewPrice, Price, PriceStore, UpdatePrice};
    pub use crate::entities::products::{NewProduct, Product, ProductStore, UpdateProduct};
    pub use crate::entities::users::{NewUser, User, UserStore};

    pub use crate::server::{
        EntityDescriptor, EntityRegistry, RestExposure, ServerBuilder, ServerHost,
    };

    pub use crate::storage::{InMemoryStore, ShopBackend, Stores};
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresStore;
}
