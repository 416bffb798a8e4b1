//! ServerBuilder for fluent API to build the HTTP service

use super::router::build_routes;
use crate::actions::AppState;
use crate::config::AppConfig;
use crate::core::revalidate::RevalidationBus;
use crate::storage::{CustomerStore, InvoiceStore};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the dashboard HTTP service
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_invoice_store(InMemoryInvoiceStore::new())
///     .with_customer_store(InMemoryCustomerStore::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: AppConfig,
    invoice_store: Option<Arc<dyn InvoiceStore>>,
    customer_store: Option<Arc<dyn CustomerStore>>,
    revalidations: Option<RevalidationBus>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with default configuration
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            invoice_store: None,
            customer_store: None,
            revalidations: None,
        }
    }

    /// Set the service configuration
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the invoice store (required)
    pub fn with_invoice_store(mut self, store: impl InvoiceStore + 'static) -> Self {
        self.invoice_store = Some(Arc::new(store));
        self
    }

    /// Set the customer store (required)
    pub fn with_customer_store(mut self, store: impl CustomerStore + 'static) -> Self {
        self.customer_store = Some(Arc::new(store));
        self
    }

    /// Use an existing revalidation bus instead of a fresh one
    ///
    /// Hand the same bus to whatever rendering layer wants to observe
    /// cache invalidations.
    pub fn with_revalidation_bus(mut self, bus: RevalidationBus) -> Self {
        self.revalidations = Some(bus);
        self
    }

    /// Build the final router
    pub fn build(self) -> Result<Router> {
        let invoices = self
            .invoice_store
            .ok_or_else(|| anyhow::anyhow!("InvoiceStore is required. Call .with_invoice_store()"))?;
        let customers = self.customer_store.ok_or_else(|| {
            anyhow::anyhow!("CustomerStore is required. Call .with_customer_store()")
        })?;

        let state = AppState {
            invoices,
            customers,
            revalidations: self.revalidations.unwrap_or_default(),
            upload: Arc::new(self.config.upload),
        };

        Ok(build_routes(state))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to the configured address and handles SIGTERM and SIGINT
    /// (Ctrl+C) for graceful shutdown.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_addr.clone();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

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
