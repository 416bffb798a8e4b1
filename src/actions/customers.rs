//! Customer form actions

use super::{AppState, CUSTOMERS_PATH};
use crate::core::error::{BillbookError, StorageError, ValidationError};
use crate::core::form::FormPayload;
use crate::model::{Customer, CustomerForm};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::Redirect;
use uuid::Uuid;

/// `POST /dashboard/customers`
///
/// Validate the form (the `image_url` field carries the path returned
/// by the upload endpoint), insert the customer, revalidate the
/// customers dashboard and redirect back to it.
pub async fn create_customer(
    State(state): State<AppState>,
    payload: FormPayload,
) -> Result<Redirect, BillbookError> {
    let form = CustomerForm::parse(&payload).map_err(|errors| {
        ValidationError::new("Missing Fields. Failed to Create Customer.", errors)
    })?;

    let customer = Customer::new(form.name, form.email, form.image_url);
    state.customers.create(customer).await.map_err(|e| {
        tracing::error!(error = %e, "customer insert failed");
        StorageError::new("Database Error: Failed to Create Customer.")
    })?;

    state.revalidations.revalidate_path(CUSTOMERS_PATH);
    Ok(Redirect::to(CUSTOMERS_PATH))
}

/// `POST /dashboard/customers/{id}/delete`
///
/// Deletion is disabled: the handler fails before any store call, the
/// same way invoice deletion does.
pub async fn delete_customer(
    State(_state): State<AppState>,
    Path(_id): Path<Uuid>,
) -> Result<Redirect, BillbookError> {
    Err(BillbookError::Internal("Failed to Delete customer".to_string()))
}

/// `GET /dashboard/customers`
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Customer>>, BillbookError> {
    let customers = state.customers.list().await.map_err(|e| {
        tracing::error!(error = %e, "customer list failed");
        StorageError::new("Database Error: Failed to Fetch Customers.")
    })?;

    Ok(Json(customers))
}
