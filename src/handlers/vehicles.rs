use super::common::{created_response, success_response, validate_input};
use crate::{errors::ServiceError, handlers::AppState, services::vehicles::CreateVehicleInput};
use axum::{
    extract::{Json, Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct VehicleListQuery {
    pub client_id: Option<Uuid>,
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(payload): Json<CreateVehicleInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let vehicle = state.services.vehicles.create(payload).await?;
    Ok(created_response(vehicle))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<VehicleListQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let vehicles = state.services.vehicles.list(query.client_id).await?;
    Ok(success_response(vehicles))
}

/// Creates the router for vehicle endpoints
pub fn vehicle_routes() -> Router<AppState> {
    Router::new().route("/", get(list_vehicles).post(create_vehicle))
}
