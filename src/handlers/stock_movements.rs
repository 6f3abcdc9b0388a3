use super::common::{created_response, success_response, validate_input};
use crate::{
    errors::ServiceError, handlers::AppState, services::stock_movements::RecordMovementInput,
};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use uuid::Uuid;

/// Record a stock movement
#[utoipa::path(
    post,
    path = "/api/stock-movements",
    request_body = RecordMovementInput,
    responses(
        (status = 201, description = "Movement recorded"),
        (status = 404, description = "Unknown part", body = crate::errors::ErrorResponse),
        (status = 422, description = "Insufficient stock for OUT movement", body = crate::errors::ErrorResponse)
    ),
    tag = "stock-movements"
)]
pub async fn record_movement(
    State(state): State<AppState>,
    Json(payload): Json<RecordMovementInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let movement = state.services.stock_movements.record(payload).await?;
    Ok(created_response(movement))
}

/// Movement history for one part, newest first
#[utoipa::path(
    get,
    path = "/api/stock-movements/{part_id}",
    params(("part_id" = Uuid, Path, description = "Part ID")),
    responses(
        (status = 200, description = "Movements for the part"),
        (status = 404, description = "Unknown part", body = crate::errors::ErrorResponse)
    ),
    tag = "stock-movements"
)]
pub async fn list_movements(
    State(state): State<AppState>,
    Path(part_id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let movements = state.services.stock_movements.list_for_part(part_id).await?;
    Ok(success_response(movements))
}

/// Creates the router for stock movement endpoints
pub fn stock_movement_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(record_movement))
        .route("/:part_id", get(list_movements))
}
