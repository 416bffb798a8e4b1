//! Reusable field validators
//!
//! The entity schemas run these against raw form fields and collect the
//! failures per field. Each validator takes the raw value and the
//! message to report, so schemas read like the validation rules they
//! implement.

use regex::Regex;
use std::sync::OnceLock;
use uuid::Uuid;

/// Field must be present and a well-formed UUID.
pub fn uuid_field(value: Option<&str>, message: &'static str) -> Result<Uuid, String> {
    value
        .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
        .ok_or_else(|| message.to_string())
}

/// Amount must be a number strictly greater than zero.
///
/// NaN (unparseable input) fails the comparison and is rejected with
/// the same message as a non-positive amount.
pub fn positive_amount(value: f64, message: &'static str) -> Result<f64, String> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(message.to_string())
    }
}

/// Field must be present. An empty string passes.
pub fn required(value: Option<&str>, message: &'static str) -> Result<String, String> {
    value.map(str::to_owned).ok_or_else(|| message.to_string())
}

/// Value must be one of the allowed variants.
pub fn one_of<'a>(
    value: Option<&'a str>,
    allowed: &[&str],
    message: &'static str,
) -> Result<&'a str, String> {
    match value {
        Some(raw) if allowed.contains(&raw) => Ok(raw),
        _ => Err(message.to_string()),
    }
}

/// Field must be present and look like an email address.
pub fn email(value: Option<&str>, message: &'static str) -> Result<String, String> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
    });

    match value {
        Some(raw) if regex.is_match(raw) => Ok(raw.to_string()),
        _ => Err(message.to_string()),
    }
}

/// Customer image URLs must contain `/customers/` and end with `.png`.
pub fn customer_image_url(value: Option<&str>, message: &'static str) -> Result<String, String> {
    match value {
        Some(raw) if raw.contains("/customers/") && raw.ends_with(".png") => Ok(raw.to_string()),
        _ => Err(message.to_string()),
    }
}
