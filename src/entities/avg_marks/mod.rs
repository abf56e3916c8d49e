//! Per-product rating aggregates, derived from marks

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod service;
pub mod store;

pub use descriptor::AvgMarkDescriptor;
pub use model::AvgMark;
pub use service::AvgMarkService;
pub use store::AvgMarkStore;
