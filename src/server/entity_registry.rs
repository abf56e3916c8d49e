//! Entity registry for managing resource descriptors and merging their routes

use axum::Router;
use std::collections::BTreeMap;

/// Trait that describes how to build routes for a resource
///
/// Each resource (orders, marks, products, ...) implements this trait to
/// contribute its routes. Paths are relative to the API prefix; the REST
/// exposure nests them under `/api/v1`.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "order")
    fn entity_type(&self) -> &str;

    /// The collection path segment (e.g., "orders")
    fn plural(&self) -> &str;

    /// Build the routes for this resource, with their state attached
    fn build_routes(&self) -> Router;
}

/// Registry for all resources in the application
///
/// Descriptors are keyed by entity type; registering the same type twice
/// replaces the first descriptor.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: BTreeMap::new(),
        }
    }

    /// Register an entity descriptor
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        tracing::debug!(entity_type = %entity_type, path = descriptor.plural(), "resource registered");
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Build a router with all registered routes
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Get all registered entity types, sorted
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
