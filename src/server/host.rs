//! Server host holding the state every exposure needs
//!
//! The host owns the store bundle and the registry of resource descriptors.
//! [`RestExposure`](super::exposure::RestExposure) turns it into an axum
//! `Router`; nothing in here depends on HTTP.

use crate::entities;
use crate::server::entity_registry::EntityRegistry;
use crate::storage::Stores;

/// Host context containing all application state
///
/// # Example
///
/// ```rust,ignore
/// let host = ServerHost::new(Stores::in_memory());
/// let app = RestExposure::build_router(Arc::new(host), vec![])?;
/// ```
pub struct ServerHost {
    /// Store handles shared by all resources
    pub stores: Stores,

    /// Descriptors for every mounted resource
    pub entity_registry: EntityRegistry,
}

impl ServerHost {
    /// Build a host with every shop resource registered against `stores`
    pub fn new(stores: Stores) -> Self {
        let mut entity_registry = EntityRegistry::new();
        entities::register_all(&mut entity_registry, &stores);
        Self {
            stores,
            entity_registry,
        }
    }

    /// Get entity types registered in the host
    pub fn entity_types(&self) -> Vec<&str> {
        self.entity_registry.entity_types()
    }

    /// Check if host is properly initialized
    pub fn is_ready(&self) -> bool {
        !self.entity_registry.is_empty()
    }
}
