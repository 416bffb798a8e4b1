//! Service entry point
//!
//! Loads configuration from the file named by `BILLBOOK_CONFIG` (or
//! uses defaults), wires the stores and serves until interrupted.

use anyhow::Result;
use billbook::config::AppConfig;
use billbook::server::ServerBuilder;
use billbook::storage::{InMemoryCustomerStore, InMemoryInvoiceStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::var("BILLBOOK_CONFIG") {
        Ok(path) => AppConfig::from_yaml_file(&path)?,
        Err(_) => AppConfig::default(),
    };

    let builder = ServerBuilder::new().with_config(config.clone());

    #[cfg(feature = "postgres")]
    if let Some(url) = &config.database_url {
        use billbook::storage::{PostgresCustomerStore, PostgresInvoiceStore};

        let pool = sqlx::PgPool::connect(url).await?;
        return builder
            .with_invoice_store(PostgresInvoiceStore::new(pool.clone()))
            .with_customer_store(PostgresCustomerStore::new(pool))
            .serve()
            .await;
    }

    builder
        .with_invoice_store(InMemoryInvoiceStore::new())
        .with_customer_store(InMemoryCustomerStore::new())
        .serve()
        .await
}
