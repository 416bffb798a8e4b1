//! Core module: errors, form decoding, field validation and
//! revalidation signalling

pub mod error;
pub mod form;
pub mod revalidate;
pub mod validate;

pub use error::{BillbookError, BillbookResult, StorageError, ValidationError};
pub use form::FormPayload;
pub use revalidate::{Revalidation, RevalidationBus};
