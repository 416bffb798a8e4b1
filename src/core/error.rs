//! Typed error handling for the billbook service
//!
//! Every failure a handler can produce maps onto one of these types so
//! the HTTP layer can render a consistent response body. Validation
//! failures carry their per-field messages so form UIs can render them
//! next to the offending input; store failures collapse to the generic
//! "Database Error: …" message that reaches the user.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: schema validation failures with field-level messages
//! - [`StorageError`]: store failures, collapsed to a generic message
//! - [`ConfigError`]: configuration parsing and loading
//! - [`RequestError`]: malformed HTTP requests
//!
//! The upload endpoint has its own wire contract (`{"error": …}`) and
//! keeps its error type in [`crate::upload`].

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// The main error type for the billbook service
#[derive(Debug)]
pub enum BillbookError {
    /// Schema validation failures
    Validation(ValidationError),

    /// Store failures
    Storage(StorageError),

    /// Configuration errors
    Config(ConfigError),

    /// Malformed requests
    Request(RequestError),

    /// Internal errors (including the disabled delete paths)
    Internal(String),
}

impl fmt::Display for BillbookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillbookError::Validation(e) => write!(f, "{}", e),
            BillbookError::Storage(e) => write!(f, "{}", e),
            BillbookError::Config(e) => write!(f, "{}", e),
            BillbookError::Request(e) => write!(f, "{}", e),
            BillbookError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for BillbookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BillbookError::Validation(e) => Some(e),
            BillbookError::Storage(e) => Some(e),
            BillbookError::Config(e) => Some(e),
            BillbookError::Request(e) => Some(e),
            BillbookError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl BillbookError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BillbookError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            BillbookError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BillbookError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BillbookError::Request(e) => e.status_code(),
            BillbookError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            BillbookError::Validation(_) => "VALIDATION_ERROR",
            BillbookError::Storage(_) => "DATABASE_ERROR",
            BillbookError::Config(_) => "CONFIG_ERROR",
            BillbookError::Request(e) => e.error_code(),
            BillbookError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            BillbookError::Validation(e) => Some(serde_json::json!({ "errors": &e.errors })),
            _ => None,
        }
    }
}

impl IntoResponse for BillbookError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A schema validation failure
///
/// Mirrors the form-state shape the dashboard expects: a summary message
/// plus every failing field with its messages, keyed by form field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Summary message, e.g. "Missing Fields. Failed to Create Invoice."
    pub message: String,
    /// Field name → messages for that field
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    /// Create a validation error from collected field errors
    pub fn new(message: impl Into<String>, errors: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            message: message.into(),
            errors,
        }
    }

    /// Create a validation error for a single field
    pub fn single(
        message: impl Into<String>,
        field: impl Into<String>,
        field_message: impl Into<String>,
    ) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.into(), vec![field_message.into()]);
        Self::new(message, errors)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for BillbookError {
    fn from(err: ValidationError) -> Self {
        BillbookError::Validation(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// A store failure, already collapsed to the message shown to the user
///
/// The underlying cause is logged where the failure happens; only the
/// generic message crosses the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageError {
    pub message: String,
}

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for BillbookError {
    fn from(err: StorageError) -> Self {
        BillbookError::Storage(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Configuration file not found
    FileNotFound { path: String },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for BillbookError {
    fn from(err: ConfigError) -> Self {
        BillbookError::Config(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to malformed HTTP requests
#[derive(Debug)]
pub enum RequestError {
    /// The form body could not be decoded
    InvalidBody { message: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidBody { message } => {
                write!(f, "Invalid request body: {}", message)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidBody { .. } => "INVALID_BODY",
        }
    }
}

impl From<RequestError> for BillbookError {
    fn from(err: RequestError) -> Self {
        BillbookError::Request(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<std::io::Error> for BillbookError {
    fn from(err: std::io::Error) -> Self {
        BillbookError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for BillbookError {
    fn from(err: serde_yaml::Error) -> Self {
        BillbookError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

/// Convert from anyhow::Error at the storage seam
impl From<anyhow::Error> for BillbookError {
    fn from(err: anyhow::Error) -> Self {
        BillbookError::Internal(err.to_string())
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for billbook operations
pub type BillbookResult<T> = Result<T, BillbookError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_is_summary_only() {
        let err = ValidationError::single(
            "Missing Fields. Failed to Create Invoice.",
            "amount",
            "Please enter an amount greater than $0.",
        );
        assert_eq!(err.to_string(), "Missing Fields. Failed to Create Invoice.");
    }

    #[test]
    fn test_validation_error_status_code() {
        let err: BillbookError = ValidationError::single("bad", "name", "required").into();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_validation_error_details_carry_fields() {
        let mut errors = BTreeMap::new();
        errors.insert("amount".to_string(), vec!["too small".to_string()]);
        errors.insert("status".to_string(), vec!["bad status".to_string()]);
        let err: BillbookError =
            ValidationError::new("Missing Fields. Failed to Create Invoice.", errors).into();

        let response = err.to_response();
        let details = response.details.expect("validation details");
        assert_eq!(details["errors"]["amount"][0], "too small");
        assert_eq!(details["errors"]["status"][0], "bad status");
    }

    #[test]
    fn test_storage_error_returns_500() {
        let err: BillbookError =
            StorageError::new("Database Error: Failed to Create Invoice.").into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "DATABASE_ERROR");
        assert_eq!(err.to_string(), "Database Error: Failed to Create Invoice.");
    }

    #[test]
    fn test_request_invalid_body_returns_400() {
        let err: BillbookError = RequestError::InvalidBody {
            message: "not urlencoded".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "INVALID_BODY");
    }

    #[test]
    fn test_internal_error_returns_500() {
        let err = BillbookError::Internal("Failed to Delete Invoice".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to Delete Invoice");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::FileNotFound {
            path: "/etc/billbook.yaml".to_string(),
        };
        assert!(err.to_string().contains("/etc/billbook.yaml"));
    }

    #[test]
    fn test_error_response_serialization() {
        let err: BillbookError =
            StorageError::new("Database Error: Failed to Fetch Invoices.").into();
        let response = err.to_response();
        assert_eq!(response.code, "DATABASE_ERROR");
        assert!(response.details.is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_from_serde_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("{").unwrap_err();
        let err: BillbookError = yaml_err.into();
        assert!(matches!(
            err,
            BillbookError::Config(ConfigError::ParseError { .. })
        ));
    }
}
