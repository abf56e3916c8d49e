//! Product comments written by users

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod store;

pub use descriptor::CommentDescriptor;
pub use model::{Comment, CommentInput};
pub use store::CommentStore;
