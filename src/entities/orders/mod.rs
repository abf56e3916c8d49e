//! Orders: placed atomically together with their lines, immutable afterwards

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod service;
pub mod store;

pub use descriptor::OrderDescriptor;
pub use model::{NewOrder, Order, OrderItem, OrderLine};
pub use service::OrderService;
pub use store::OrderStore;
