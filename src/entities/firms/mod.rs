//! Firms (manufacturers) referenced by products

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod store;

pub use descriptor::FirmDescriptor;
pub use model::{Firm, FirmInput};
pub use store::FirmStore;
