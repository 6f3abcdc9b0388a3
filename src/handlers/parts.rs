use super::common::{created_response, no_content_response, success_response, validate_input};
use crate::{
    errors::ServiceError,
    handlers::AppState,
    services::parts::{CreatePartInput, UpdatePartInput},
};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, put},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PartListQuery {
    /// Case-insensitive substring over code, notes, type and supplier names
    pub search: Option<String>,
}

/// Create a new part
#[utoipa::path(
    post,
    path = "/api/parts",
    request_body = CreatePartInput,
    responses(
        (status = 201, description = "Part created"),
        (status = 400, description = "Unknown part type or supplier", body = crate::errors::ErrorResponse),
        (status = 409, description = "Part code already in use", body = crate::errors::ErrorResponse)
    ),
    tag = "parts"
)]
pub async fn create_part(
    State(state): State<AppState>,
    Json(payload): Json<CreatePartInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let part = state.services.parts.create(payload).await?;
    Ok(created_response(part))
}

/// List parts joined with type and supplier names
#[utoipa::path(
    get,
    path = "/api/parts",
    params(PartListQuery),
    responses(
        (status = 200, description = "List parts", body = [crate::services::parts::PartWithDetails])
    ),
    tag = "parts"
)]
pub async fn list_parts(
    State(state): State<AppState>,
    Query(query): Query<PartListQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let parts = state
        .services
        .parts
        .list_with_details(query.search.as_deref())
        .await?;
    Ok(success_response(parts))
}

/// Update a part
#[utoipa::path(
    put,
    path = "/api/parts/{id}",
    params(("id" = Uuid, Path, description = "Part ID")),
    request_body = UpdatePartInput,
    responses(
        (status = 200, description = "Part updated"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Part code already in use", body = crate::errors::ErrorResponse)
    ),
    tag = "parts"
)]
pub async fn update_part(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePartInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let part = state.services.parts.update(id, payload).await?;
    Ok(success_response(part))
}

/// Delete a part and its stock movement history
#[utoipa::path(
    delete,
    path = "/api/parts/{id}",
    params(("id" = Uuid, Path, description = "Part ID")),
    responses(
        (status = 204, description = "Part deleted"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "parts"
)]
pub async fn delete_part(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.parts.delete(id).await?;
    Ok(no_content_response())
}

/// Creates the router for part endpoints
pub fn part_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_parts).post(create_part))
        .route("/:id", put(update_part))
        .route("/:id", delete(delete_part))
}
