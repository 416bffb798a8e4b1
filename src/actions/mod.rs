//! Form action handlers
//!
//! Each action validates raw form fields against the entity schema,
//! executes a single store operation, publishes a revalidation notice
//! for the affected dashboard path and redirects back to it. Failures
//! collapse to the generic messages the dashboard shows.

pub mod customers;
pub mod invoices;

pub use customers::{create_customer, delete_customer, list_customers};
pub use invoices::{create_invoice, delete_invoice, list_invoices, update_invoice};

use crate::config::UploadConfig;
use crate::core::revalidate::RevalidationBus;
use crate::storage::{CustomerStore, InvoiceStore};
use std::sync::Arc;

/// Dashboard path revalidated and redirected to after invoice mutations
pub const INVOICES_PATH: &str = "/dashboard/invoices";

/// Dashboard path revalidated and redirected to after customer mutations
pub const CUSTOMERS_PATH: &str = "/dashboard/customers";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub invoices: Arc<dyn InvoiceStore>,
    pub customers: Arc<dyn CustomerStore>,
    pub revalidations: RevalidationBus,
    pub upload: Arc<UploadConfig>,
}
