//! Route table for the dashboard service

use crate::actions::{self, AppState};
use crate::upload;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the application routes
///
/// - form actions for invoices and customers
/// - the upload endpoint
/// - the public customers directory (static, so returned image paths
///   resolve)
/// - a liveness probe
pub fn build_routes(state: AppState) -> Router {
    let static_prefix = state.upload.route_prefix.clone();
    let static_dir = state.upload.customers_dir();

    Router::new()
        .route("/healthz", get(health))
        .route(
            "/dashboard/invoices",
            get(actions::list_invoices).post(actions::create_invoice),
        )
        .route("/dashboard/invoices/{id}", post(actions::update_invoice))
        .route(
            "/dashboard/invoices/{id}/delete",
            post(actions::delete_invoice),
        )
        .route(
            "/dashboard/customers",
            get(actions::list_customers).post(actions::create_customer),
        )
        .route(
            "/dashboard/customers/{id}/delete",
            post(actions::delete_customer),
        )
        .route("/api/upload", post(upload::upload_image))
        .nest_service(&static_prefix, ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
