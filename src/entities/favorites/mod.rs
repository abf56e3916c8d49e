//! Per-user favorite products

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod store;

pub use descriptor::FavoriteDescriptor;
pub use model::{Favorite, FavoriteInput};
pub use store::FavoriteStore;
