use super::common::{created_response, no_content_response, success_response, validate_input};
use crate::{
    errors::ServiceError, handlers::AppState, services::part_types::UpsertPartTypeInput,
};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{delete, get, put},
    Router,
};
use uuid::Uuid;

async fn create_part_type(
    State(state): State<AppState>,
    Json(payload): Json<UpsertPartTypeInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let part_type = state.services.part_types.create(payload).await?;
    Ok(created_response(part_type))
}

async fn list_part_types(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let part_types = state.services.part_types.list().await?;
    Ok(success_response(part_types))
}

async fn update_part_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpsertPartTypeInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let part_type = state.services.part_types.update(id, payload).await?;
    Ok(success_response(part_type))
}

async fn delete_part_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.part_types.delete(id).await?;
    Ok(no_content_response())
}

/// Creates the router for part type endpoints
pub fn part_type_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_part_types).post(create_part_type))
        .route("/:id", put(update_part_type))
        .route("/:id", delete(delete_part_type))
}
