//! In-memory store implementations for testing and development

use crate::model::{Customer, Invoice, InvoiceUpdate};
use crate::storage::{CustomerStore, InvoiceStore};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory invoice store
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryInvoiceStore {
    invoices: Arc<RwLock<HashMap<Uuid, Invoice>>>,
}

impl InMemoryInvoiceStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            invoices: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryInvoiceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn create(&self, invoice: Invoice) -> Result<Invoice> {
        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        invoices.insert(invoice.id, invoice.clone());

        Ok(invoice)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Invoice>> {
        let invoices = self
            .invoices
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(invoices.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Invoice>> {
        let invoices = self
            .invoices
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(invoices.values().cloned().collect())
    }

    async fn update(&self, id: &Uuid, update: InvoiceUpdate) -> Result<Invoice> {
        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let invoice = invoices
            .get_mut(id)
            .ok_or_else(|| anyhow!("Invoice not found: {}", id))?;

        invoice.customer_id = update.customer_id;
        invoice.amount_cents = update.amount_cents;
        invoice.status = update.status;

        Ok(invoice.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        invoices.remove(id);

        Ok(())
    }
}

/// In-memory customer store
#[derive(Clone)]
pub struct InMemoryCustomerStore {
    customers: Arc<RwLock<HashMap<Uuid, Customer>>>,
}

impl InMemoryCustomerStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            customers: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryCustomerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn create(&self, customer: Customer) -> Result<Customer> {
        let mut customers = self
            .customers
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        customers.insert(customer.id, customer.clone());

        Ok(customer)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Customer>> {
        let customers = self
            .customers
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(customers.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Customer>> {
        let customers = self
            .customers
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(customers.values().cloned().collect())
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        let mut customers = self
            .customers
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        customers.remove(id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InvoiceStatus;

    fn sample_invoice() -> Invoice {
        Invoice::new(Uuid::new_v4(), 1999, InvoiceStatus::Pending)
    }

    #[tokio::test]
    async fn test_create_invoice() {
        let store = InMemoryInvoiceStore::new();
        let invoice = sample_invoice();

        let created = store.create(invoice.clone()).await.unwrap();

        assert_eq!(created.id, invoice.id);
        assert_eq!(created.amount_cents, 1999);
    }

    #[tokio::test]
    async fn test_get_invoice() {
        let store = InMemoryInvoiceStore::new();
        let invoice = sample_invoice();

        store.create(invoice.clone()).await.unwrap();

        let retrieved = store.get(&invoice.id).await.unwrap();
        assert_eq!(retrieved, Some(invoice));
    }

    #[tokio::test]
    async fn test_get_missing_invoice_is_none() {
        let store = InMemoryInvoiceStore::new();
        assert!(store.get(&Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_invoices() {
        let store = InMemoryInvoiceStore::new();

        store.create(sample_invoice()).await.unwrap();
        store.create(sample_invoice()).await.unwrap();

        let invoices = store.list().await.unwrap();
        assert_eq!(invoices.len(), 2);
    }

    #[tokio::test]
    async fn test_update_invoice_rewrites_columns_but_not_date() {
        let store = InMemoryInvoiceStore::new();
        let invoice = sample_invoice();
        store.create(invoice.clone()).await.unwrap();

        let new_customer = Uuid::new_v4();
        let updated = store
            .update(
                &invoice.id,
                InvoiceUpdate {
                    customer_id: new_customer,
                    amount_cents: 25000,
                    status: InvoiceStatus::Paid,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.customer_id, new_customer);
        assert_eq!(updated.amount_cents, 25000);
        assert_eq!(updated.status, InvoiceStatus::Paid);
        assert_eq!(updated.date, invoice.date);
    }

    #[tokio::test]
    async fn test_update_missing_invoice_fails() {
        let store = InMemoryInvoiceStore::new();
        let result = store
            .update(
                &Uuid::new_v4(),
                InvoiceUpdate {
                    customer_id: Uuid::new_v4(),
                    amount_cents: 100,
                    status: InvoiceStatus::Paid,
                },
            )
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_delete_invoice() {
        let store = InMemoryInvoiceStore::new();
        let invoice = sample_invoice();
        store.create(invoice.clone()).await.unwrap();

        store.delete(&invoice.id).await.unwrap();

        assert!(store.get(&invoice.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_invoice_is_noop() {
        let store = InMemoryInvoiceStore::new();
        store.delete(&Uuid::new_v4()).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_and_get_customer() {
        let store = InMemoryCustomerStore::new();
        let customer = Customer::new("Delba", "delba@oliveira.com", "/customers/delba.png");

        store.create(customer.clone()).await.unwrap();

        let retrieved = store.get(&customer.id).await.unwrap();
        assert_eq!(retrieved, Some(customer));
    }

    #[tokio::test]
    async fn test_list_customers() {
        let store = InMemoryCustomerStore::new();
        store
            .create(Customer::new("A", "a@example.com", "/customers/a.png"))
            .await
            .unwrap();
        store
            .create(Customer::new("B", "b@example.com", "/customers/b.png"))
            .await
            .unwrap();

        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_customer() {
        let store = InMemoryCustomerStore::new();
        let customer = Customer::new("Delba", "delba@oliveira.com", "/customers/delba.png");
        store.create(customer.clone()).await.unwrap();

        store.delete(&customer.id).await.unwrap();

        assert!(store.get(&customer.id).await.unwrap().is_none());
    }
}
