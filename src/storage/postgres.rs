//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresInvoiceStore` and `PostgresCustomerStore` backed
//! by a PostgreSQL database via `sqlx::PgPool`. Every operation is a
//! single parameterized statement against the `invoices` or
//! `customers` table; there are no transactions and no optimistic
//! concurrency control.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! billbook = { version = "0.1", features = ["postgres"] }
//! ```

use crate::model::{Customer, Invoice, InvoiceUpdate};
use crate::storage::{CustomerStore, InvoiceStore};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Invoice store backed by PostgreSQL
#[derive(Clone, Debug)]
pub struct PostgresInvoiceStore {
    pool: PgPool,
}

impl PostgresInvoiceStore {
    /// Create a new `PostgresInvoiceStore` with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn invoice_from_row(row: &PgRow) -> Result<Invoice> {
    let status: String = row.try_get("status")?;
    Ok(Invoice {
        id: row.try_get("id")?,
        customer_id: row.try_get("customer_id")?,
        amount_cents: row.try_get("amount")?,
        status: status
            .parse()
            .map_err(|e| anyhow!("invalid invoice row: {}", e))?,
        date: row.try_get("date")?,
    })
}

#[async_trait]
impl InvoiceStore for PostgresInvoiceStore {
    async fn create(&self, invoice: Invoice) -> Result<Invoice> {
        sqlx::query(
            "INSERT INTO invoices (id, customer_id, amount, status, date) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(invoice.id)
        .bind(invoice.customer_id)
        .bind(invoice.amount_cents)
        .bind(invoice.status.as_str())
        .bind(invoice.date)
        .execute(&self.pool)
        .await
        .context("failed to insert invoice")?;

        Ok(invoice)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Invoice>> {
        let row = sqlx::query(
            "SELECT id, customer_id, amount, status, date FROM invoices WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("failed to fetch invoice")?;

        row.as_ref().map(invoice_from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Invoice>> {
        let rows = sqlx::query(
            "SELECT id, customer_id, amount, status, date FROM invoices ORDER BY date DESC",
        )
        .fetch_all(&self.pool)
        .await
        .context("failed to list invoices")?;

        rows.iter().map(invoice_from_row).collect()
    }

    async fn update(&self, id: &Uuid, update: InvoiceUpdate) -> Result<Invoice> {
        let result = sqlx::query(
            "UPDATE invoices SET customer_id = $1, amount = $2, status = $3 WHERE id = $4",
        )
        .bind(update.customer_id)
        .bind(update.amount_cents)
        .bind(update.status.as_str())
        .bind(id)
        .execute(&self.pool)
        .await
        .context("failed to update invoice")?;

        if result.rows_affected() == 0 {
            return Err(anyhow!("Invoice not found: {}", id));
        }

        self.get(id)
            .await?
            .ok_or_else(|| anyhow!("Invoice not found: {}", id))
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("failed to delete invoice")?;

        Ok(())
    }
}

/// Customer store backed by PostgreSQL
#[derive(Clone, Debug)]
pub struct PostgresCustomerStore {
    pool: PgPool,
}

impl PostgresCustomerStore {
    /// Create a new `PostgresCustomerStore` with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn customer_from_row(row: &PgRow) -> Result<Customer> {
    Ok(Customer {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        image_url: row.try_get("image_url")?,
    })
}

#[async_trait]
impl CustomerStore for PostgresCustomerStore {
    async fn create(&self, customer: Customer) -> Result<Customer> {
        sqlx::query(
            "INSERT INTO customers (id, name, email, image_url) VALUES ($1, $2, $3, $4)",
        )
        .bind(customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.image_url)
        .execute(&self.pool)
        .await
        .context("failed to insert customer")?;

        Ok(customer)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Customer>> {
        let row = sqlx::query("SELECT id, name, email, image_url FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("failed to fetch customer")?;

        row.as_ref().map(customer_from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Customer>> {
        let rows = sqlx::query("SELECT id, name, email, image_url FROM customers ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .context("failed to list customers")?;

        rows.iter().map(customer_from_row).collect()
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("failed to delete customer")?;

        Ok(())
    }
}
