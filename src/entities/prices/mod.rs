//! Prices: one product can carry several price rows (e.g. per pack size)

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod store;

pub use descriptor::PriceDescriptor;
pub use model::{NewPrice, Price, UpdatePrice};
pub use store::PriceStore;
