use super::common::success_response;
use crate::{errors::ServiceError, handlers::AppState, services::branding::BrandingConfig};
use axum::{
    extract::{Json, State},
    response::IntoResponse,
    routing::get,
    Router,
};

/// Current branding overlay (defaults when nothing was stored)
#[utoipa::path(
    get,
    path = "/api/settings/branding",
    responses((status = 200, description = "Branding configuration", body = BrandingConfig)),
    tag = "settings"
)]
pub async fn get_branding(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    Ok(success_response(state.services.branding.get()))
}

/// Replace the branding overlay and notify subscribers
#[utoipa::path(
    put,
    path = "/api/settings/branding",
    request_body = BrandingConfig,
    responses((status = 200, description = "Branding configuration stored", body = BrandingConfig)),
    tag = "settings"
)]
pub async fn put_branding(
    State(state): State<AppState>,
    Json(payload): Json<BrandingConfig>,
) -> Result<impl IntoResponse, ServiceError> {
    let stored = state.services.branding.update(payload).await?;
    Ok(success_response(stored))
}

/// Creates the router for settings endpoints
pub fn settings_routes() -> Router<AppState> {
    Router::new().route("/branding", get(get_branding).put(put_branding))
}
