//! Raw form payload extraction
//!
//! Form submissions arrive as `application/x-www-form-urlencoded`
//! bodies. [`FormPayload`] decodes them into a flat string map and
//! offers the accessors the entity schemas consume. A key that was not
//! submitted reads as absent, which the schemas treat differently from
//! an empty value.

use crate::core::error::{BillbookError, RequestError};
use axum::Form;
use axum::extract::{FromRequest, Request};
use std::collections::HashMap;

/// Decoded form fields of a single submission
#[derive(Debug, Clone, Default)]
pub struct FormPayload {
    fields: HashMap<String, String>,
}

impl FormPayload {
    /// Build a payload from key/value pairs (used by tests and callers
    /// that don't go through the extractor)
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get a field's raw value, `None` when the field was not submitted
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Numeric coercion matching the form layer the dashboard uses:
    /// a missing or empty field reads as `0`, anything unparseable as
    /// NaN (which every ordered comparison then rejects).
    pub fn coerced_number(&self, key: &str) -> f64 {
        match self.get(key) {
            None => 0.0,
            Some(raw) if raw.trim().is_empty() => 0.0,
            Some(raw) => raw.trim().parse::<f64>().unwrap_or(f64::NAN),
        }
    }

    /// Number of submitted fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the submission carried any fields at all
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<S> FromRequest<S> for FormPayload
where
    S: Send + Sync,
{
    type Rejection = BillbookError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
            .await
            .map_err(|err| RequestError::InvalidBody {
                message: err.to_string(),
            })?;

        Ok(Self { fields })
    }
}
