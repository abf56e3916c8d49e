//! Per-user shopping basket

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod store;

pub use descriptor::BasketDescriptor;
pub use model::{BasketEntry, BasketItem};
pub use store::BasketStore;
