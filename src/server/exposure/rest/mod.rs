//! REST API exposure
//!
//! Consumes a `ServerHost` and produces the axum `Router`:
//!
//! - `/health` and `/healthz` at the root
//! - every resource (and any custom routes) under `/api/v1`
//! - an enveloped 404 for unknown paths
//! - request tracing and permissive CORS

use super::super::host::ServerHost;
use crate::core::ApiError;
use anyhow::Result;
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Prefix under which every resource is mounted
pub const API_PREFIX: &str = "/api/v1";

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// # Arguments
    ///
    /// * `host` - The server host containing the registered resources
    /// * `custom_routes` - Additional routes, nested under [`API_PREFIX`]
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let api = custom_routes
            .into_iter()
            .fold(host.entity_registry.build_routes(), |api, custom| {
                api.merge(custom)
            });

        tracing::debug!(resources = ?host.entity_types(), prefix = API_PREFIX, "REST routes built");

        let app = Self::health_routes()
            .nest(API_PREFIX, api)
            .fallback(Self::route_not_found)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            );

        Ok(app)
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": env!("CARGO_PKG_NAME")
        }))
    }

    async fn route_not_found() -> ApiError {
        ApiError::new(StatusCode::NOT_FOUND, "error_route_not_found", "Route not found")
    }
}
