//! Invoice entity and its form schema

use crate::core::form::FormPayload;
use crate::core::validate::{one_of, positive_amount, uuid_field};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Invoice lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a stored status string is neither `pending` nor `paid`
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown invoice status '{0}'")]
pub struct ParseStatusError(pub String);

impl FromStr for InvoiceStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// An invoice row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub customer_id: Uuid,
    /// Amount in integer cents
    pub amount_cents: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

impl Invoice {
    /// Create a new invoice dated today (UTC)
    pub fn new(customer_id: Uuid, amount_cents: i64, status: InvoiceStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            amount_cents,
            status,
            date: Utc::now().date_naive(),
        }
    }
}

/// Validated invoice form fields
///
/// Create and update share this schema; both omit `id` and `date`.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceForm {
    pub customer_id: Uuid,
    /// Dollar amount as entered
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl InvoiceForm {
    /// Validate raw form fields, reporting every failing field
    pub fn parse(form: &FormPayload) -> Result<Self, BTreeMap<String, Vec<String>>> {
        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();

        let customer_id = match uuid_field(form.get("customerId"), "Please select a customer.") {
            Ok(id) => Some(id),
            Err(message) => {
                errors.entry("customerId".to_string()).or_default().push(message);
                None
            }
        };

        let amount = match positive_amount(
            form.coerced_number("amount"),
            "Please enter an amount greater than $0.",
        ) {
            Ok(amount) => Some(amount),
            Err(message) => {
                errors.entry("amount".to_string()).or_default().push(message);
                None
            }
        };

        let status = match one_of(
            form.get("status"),
            &["pending", "paid"],
            "Please select an invoice status.",
        ) {
            Ok(raw) => raw.parse::<InvoiceStatus>().ok(),
            Err(message) => {
                errors.entry("status".to_string()).or_default().push(message);
                None
            }
        };

        match (customer_id, amount, status) {
            (Some(customer_id), Some(amount), Some(status)) if errors.is_empty() => Ok(Self {
                customer_id,
                amount,
                status,
            }),
            _ => Err(errors),
        }
    }

    /// Dollars to integer cents, as stored
    pub fn amount_cents(&self) -> i64 {
        (self.amount * 100.0).round() as i64
    }

    /// The column set the update statement touches
    pub fn as_update(&self) -> InvoiceUpdate {
        InvoiceUpdate {
            customer_id: self.customer_id,
            amount_cents: self.amount_cents(),
            status: self.status,
        }
    }
}

/// Columns touched when updating an existing invoice (`date` is never
/// rewritten)
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceUpdate {
    pub customer_id: Uuid,
    pub amount_cents: i64,
    pub status: InvoiceStatus,
}
