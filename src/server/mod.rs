//! Server module for building the shop HTTP server
//!
//! `ServerBuilder` wires a store bundle into a `ServerHost`, which registers
//! every resource; `RestExposure` turns the host into an axum `Router`.

pub mod builder;
pub mod entity_registry;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use exposure::RestExposure;
pub use host::ServerHost;
