//! # Billbook
//!
//! Administrative dashboard backend for invoices and customers.
//!
//! ## Features
//!
//! - **Form actions**: create/update invoices and create customers from
//!   urlencoded form submissions, with field-level validation errors
//! - **Schema validation**: every failing field reported, matching the
//!   messages the dashboard shows next to its inputs
//! - **Image upload**: multipart endpoint that stores a PNG under the
//!   public customers directory, optionally recompressed
//! - **Revalidation bus**: broadcast cache-invalidation notices after
//!   every successful mutation
//! - **Pluggable storage**: in-memory stores by default, PostgreSQL
//!   behind the `postgres` feature
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use billbook::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_invoice_store(InMemoryInvoiceStore::new())
//!         .with_customer_store(InMemoryCustomerStore::new())
//!         .serve()
//!         .await
//! }
//! ```

pub mod actions;
pub mod config;
pub mod core;
pub mod model;
pub mod server;
pub mod storage;
pub mod upload;

/// Re-exports of commonly used types
pub mod prelude {
    // === Actions ===
    pub use crate::actions::{AppState, CUSTOMERS_PATH, INVOICES_PATH};

    // === Config ===
    pub use crate::config::{AppConfig, CompressionConfig, UploadConfig};

    // === Core ===
    pub use crate::core::error::{BillbookError, BillbookResult, StorageError, ValidationError};
    pub use crate::core::form::FormPayload;
    pub use crate::core::revalidate::{Revalidation, RevalidationBus};

    // === Model ===
    pub use crate::model::{Customer, CustomerForm, Invoice, InvoiceForm, InvoiceStatus, InvoiceUpdate};

    // === Server ===
    pub use crate::server::ServerBuilder;

    // === Storage ===
    pub use crate::storage::{
        CustomerStore, InMemoryCustomerStore, InMemoryInvoiceStore, InvoiceStore,
    };
    #[cfg(feature = "postgres")]
    pub use crate::storage::{PostgresCustomerStore, PostgresInvoiceStore};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
