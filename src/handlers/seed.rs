use super::common::success_response;
use crate::{errors::ServiceError, handlers::AppState};
use axum::{extract::State, response::IntoResponse, routing::post, Router};
use serde_json::json;

/// Idempotently seed reference data (part types, suppliers, catalogs)
#[utoipa::path(
    post,
    path = "/api/initialize-data",
    responses((status = 200, description = "Seed report", body = crate::services::seed::SeedReport)),
    tag = "system"
)]
pub async fn initialize_data(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let report = state.services.seed.initialize_data().await?;
    Ok(success_response(json!({
        "message": "Alapadatok inicializálva",
        "report": report,
    })))
}

/// Creates the router for the seeding endpoint
pub fn seed_routes() -> Router<AppState> {
    Router::new().route("/initialize-data", post(initialize_data))
}
