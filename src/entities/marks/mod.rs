//! Marks: one numeric rating per user and product.
//!
//! Every successful add or delete refreshes the product's
//! [`AvgMark`](crate::entities::avg_marks::AvgMark) inline; a failed refresh
//! is logged and never fails the mark request.

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod store;

pub use descriptor::MarkDescriptor;
pub use model::{Mark, MarkInput};
pub use store::MarkStore;
