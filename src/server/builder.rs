//! ServerBuilder for fluent API to build the menu service

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use super::router::build_app;
use crate::storage::MenuStore;

/// Builder for the menu HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(MenuStore::seeded())
///     .build()?;
/// ```
pub struct ServerBuilder {
    store: Option<MenuStore>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            store: None,
            custom_routes: Vec::new(),
        }
    }

    /// Set the menu store (required)
    pub fn with_store(mut self, store: MenuStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Add custom routes to the server
    ///
    /// Use this for routes outside the menu CRUD surface, such as metrics
    /// endpoints or operator-only debug pages. Custom routes are merged
    /// before the fallback is installed, so they take precedence over the
    /// route-not-found body.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final router
    pub fn build(mut self) -> Result<Router> {
        let store = self
            .store
            .take()
            .ok_or_else(|| anyhow::anyhow!("MenuStore is required. Call .with_store()"))?;

        let custom_routes = std::mem::take(&mut self.custom_routes);

        Ok(build_app(store, custom_routes))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    ///
    /// # Example
    ///
    /// ```ignore
    /// ServerBuilder::new()
    ///     .with_store(MenuStore::seeded())
    ///     .serve("0.0.0.0:3000").await?;
    /// ```
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

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}


/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
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
