//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::storage::{ShopBackend, Stores};
use anyhow::{Result, anyhow};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the shop HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_backend(InMemoryStore::new())
///     .serve("0.0.0.0:8080")
///     .await?;
/// ```
#[derive(Default)]
pub struct ServerBuilder {
    stores: Option<Stores>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the store bundle (required)
    pub fn with_stores(mut self, stores: Stores) -> Self {
        self.stores = Some(stores);
        self
    }

    /// Serve every resource from one backend
    pub fn with_backend(self, backend: impl ShopBackend) -> Self {
        self.with_stores(Stores::from_backend(backend))
    }

    /// Add custom routes, mounted under `/api/v1` next to the resources
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    pub fn build_host(self) -> Result<ServerHost> {
        let stores = self
            .stores
            .ok_or_else(|| anyhow!("stores are required; call with_stores or with_backend"))?;
        Ok(ServerHost::new(stores))
    }

    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Bind `addr` and serve until Ctrl+C or SIGTERM
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
