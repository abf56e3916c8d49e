//! Users, addressed by their Telegram id

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod store;

pub use descriptor::UserDescriptor;
pub use model::{NewUser, UpdateUser, User};
pub use store::UserStore;
