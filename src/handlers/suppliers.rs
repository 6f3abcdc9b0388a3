use super::common::{created_response, no_content_response, success_response, validate_input};
use crate::{errors::ServiceError, handlers::AppState, services::suppliers::UpsertSupplierInput};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{delete, get, put},
    Router,
};
use uuid::Uuid;

async fn create_supplier(
    State(state): State<AppState>,
    Json(payload): Json<UpsertSupplierInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let supplier = state.services.suppliers.create(payload).await?;
    Ok(created_response(supplier))
}

async fn list_suppliers(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let suppliers = state.services.suppliers.list().await?;
    Ok(success_response(suppliers))
}

async fn update_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpsertSupplierInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let supplier = state.services.suppliers.update(id, payload).await?;
    Ok(success_response(supplier))
}

async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.suppliers.delete(id).await?;
    Ok(no_content_response())
}

/// Creates the router for supplier endpoints
pub fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_suppliers).post(create_supplier))
        .route("/:id", put(update_supplier))
        .route("/:id", delete(delete_supplier))
}
