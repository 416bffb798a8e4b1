//! Storage backends for invoices and customers
//!
//! The store traits are storage-agnostic; handlers only see trait
//! objects. The in-memory backend is the default, and a PostgreSQL
//! backend is available behind the `postgres` feature flag.

use crate::model::{Customer, Invoice, InvoiceUpdate};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use memory::{InMemoryCustomerStore, InMemoryInvoiceStore};
#[cfg(feature = "postgres")]
pub use postgres::{PostgresCustomerStore, PostgresInvoiceStore};

/// CRUD operations over invoice rows
///
/// Implementations execute single statements; there is no transaction
/// spanning multiple operations and no optimistic concurrency control.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Insert a new invoice
    async fn create(&self, invoice: Invoice) -> Result<Invoice>;

    /// Get an invoice by id
    async fn get(&self, id: &Uuid) -> Result<Option<Invoice>>;

    /// List all invoices
    async fn list(&self) -> Result<Vec<Invoice>>;

    /// Update customer, amount and status of an existing invoice
    async fn update(&self, id: &Uuid, update: InvoiceUpdate) -> Result<Invoice>;

    /// Delete an invoice
    async fn delete(&self, id: &Uuid) -> Result<()>;
}

/// Operations over customer rows
///
/// There is no update path for customers.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Insert a new customer
    async fn create(&self, customer: Customer) -> Result<Customer>;

    /// Get a customer by id
    async fn get(&self, id: &Uuid) -> Result<Option<Customer>>;

    /// List all customers
    async fn list(&self) -> Result<Vec<Customer>>;

    /// Delete a customer
    async fn delete(&self, id: &Uuid) -> Result<()>;
}
