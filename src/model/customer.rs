//! Customer entity and its form schema

use crate::core::form::FormPayload;
use crate::core::validate::{customer_image_url, email, required};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A customer row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Public path of the customer's avatar, e.g. `/customers/delba.png`
    pub image_url: String,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            image_url: image_url.into(),
        }
    }
}

/// Validated customer form fields
///
/// `name` only has to be present — an empty string passes, matching the
/// server schema rather than the stricter client-side rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub image_url: String,
}

impl CustomerForm {
    /// Validate raw form fields, reporting every failing field
    pub fn parse(form: &FormPayload) -> Result<Self, BTreeMap<String, Vec<String>>> {
        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();

        let name = match required(form.get("name"), "Please enter a valid name.") {
            Ok(name) => Some(name),
            Err(message) => {
                errors.entry("name".to_string()).or_default().push(message);
                None
            }
        };

        let email = match email(form.get("email"), "Please enter a valid email address.") {
            Ok(email) => Some(email),
            Err(message) => {
                errors.entry("email".to_string()).or_default().push(message);
                None
            }
        };

        let image_url = match customer_image_url(
            form.get("image_url"),
            "The image URL must contain \"/customers/\" and end with \".png\".",
        ) {
            Ok(url) => Some(url),
            Err(message) => {
                errors
                    .entry("image_url".to_string())
                    .or_default()
                    .push(message);
                None
            }
        };

        match (name, email, image_url) {
            (Some(name), Some(email), Some(image_url)) if errors.is_empty() => Ok(Self {
                name,
                email,
                image_url,
            }),
            _ => Err(errors),
        }
    }
}
