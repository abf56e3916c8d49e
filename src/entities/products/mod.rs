//! Products: catalog entries with free-form attributes and an image gallery

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod store;

pub use descriptor::ProductDescriptor;
pub use model::{NewProduct, Product, UpdateProduct};
pub use store::ProductStore;
