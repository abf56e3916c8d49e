//! Product categories, each with an optional cover image

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod store;

pub use descriptor::CategoryDescriptor;
pub use model::{Category, CategoryInput, ImageInput};
pub use store::CategoryStore;
