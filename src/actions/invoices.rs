//! Invoice form actions

use super::{AppState, INVOICES_PATH};
use crate::core::error::{BillbookError, StorageError, ValidationError};
use crate::core::form::FormPayload;
use crate::model::{Invoice, InvoiceForm};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::Redirect;
use uuid::Uuid;

/// `POST /dashboard/invoices`
///
/// Validate the form, insert the invoice (dollars converted to integer
/// cents, dated today), revalidate the invoices dashboard and redirect
/// back to it.
pub async fn create_invoice(
    State(state): State<AppState>,
    payload: FormPayload,
) -> Result<Redirect, BillbookError> {
    let form = InvoiceForm::parse(&payload)
        .map_err(|errors| ValidationError::new("Missing Fields. Failed to Create Invoice.", errors))?;

    let invoice = Invoice::new(form.customer_id, form.amount_cents(), form.status);
    state.invoices.create(invoice).await.map_err(|e| {
        tracing::error!(error = %e, "invoice insert failed");
        StorageError::new("Database Error: Failed to Create Invoice.")
    })?;

    state.revalidations.revalidate_path(INVOICES_PATH);
    Ok(Redirect::to(INVOICES_PATH))
}

/// `POST /dashboard/invoices/{id}`
///
/// Same schema as create; rewrites customer, amount and status but
/// never the date.
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: FormPayload,
) -> Result<Redirect, BillbookError> {
    let form = InvoiceForm::parse(&payload)
        .map_err(|errors| ValidationError::new("Missing Fields. Failed to Update Invoice.", errors))?;

    state
        .invoices
        .update(&id, form.as_update())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, %id, "invoice update failed");
            StorageError::new("Database Error: Failed to Update Invoice.")
        })?;

    state.revalidations.revalidate_path(INVOICES_PATH);
    Ok(Redirect::to(INVOICES_PATH))
}

/// `POST /dashboard/invoices/{id}/delete`
///
/// Deletion is disabled: the handler fails before any store call, so
/// every delete surfaces as an error regardless of store state. The
/// store's delete operation itself is covered by the storage tests.
pub async fn delete_invoice(
    State(_state): State<AppState>,
    Path(_id): Path<Uuid>,
) -> Result<Redirect, BillbookError> {
    Err(BillbookError::Internal("Failed to Delete Invoice".to_string()))
}

/// `GET /dashboard/invoices`
pub async fn list_invoices(
    State(state): State<AppState>,
) -> Result<Json<Vec<Invoice>>, BillbookError> {
    let invoices = state.invoices.list().await.map_err(|e| {
        tracing::error!(error = %e, "invoice list failed");
        StorageError::new("Database Error: Failed to Fetch Invoices.")
    })?;

    Ok(Json(invoices))
}
