//! Domain types for the dashboard entities

pub mod customer;
pub mod invoice;

pub use customer::{Customer, CustomerForm};
pub use invoice::{Invoice, InvoiceForm, InvoiceStatus, InvoiceUpdate, ParseStatusError};
