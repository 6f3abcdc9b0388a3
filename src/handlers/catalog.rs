use super::common::{created_response, no_content_response, success_response, validate_input};
use crate::{
    errors::ServiceError,
    handlers::AppState,
    services::catalog::{
        CreateCarMakeInput, CreateCarModelInput, UpsertTurboPartInput, UpsertWorkProcessInput,
    },
};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{delete, get, put},
    Router,
};
use uuid::Uuid;

// ---- Turbo part catalog ----

async fn list_turbo_parts(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let parts = state.services.catalog.list_turbo_parts().await?;
    Ok(success_response(parts))
}

async fn create_turbo_part(
    State(state): State<AppState>,
    Json(payload): Json<UpsertTurboPartInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let part = state.services.catalog.create_turbo_part(payload).await?;
    Ok(created_response(part))
}

async fn update_turbo_part(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpsertTurboPartInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let part = state.services.catalog.update_turbo_part(id, payload).await?;
    Ok(success_response(part))
}

async fn delete_turbo_part(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.catalog.delete_turbo_part(id).await?;
    Ok(no_content_response())
}

/// Creates the router for the turbo part catalog
pub fn turbo_part_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_turbo_parts).post(create_turbo_part))
        .route("/:id", put(update_turbo_part))
        .route("/:id", delete(delete_turbo_part))
}

// ---- Work process catalog ----

async fn list_work_processes(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let processes = state.services.catalog.list_work_processes().await?;
    Ok(success_response(processes))
}

async fn create_work_process(
    State(state): State<AppState>,
    Json(payload): Json<UpsertWorkProcessInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let process = state.services.catalog.create_work_process(payload).await?;
    Ok(created_response(process))
}

async fn update_work_process(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpsertWorkProcessInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let process = state
        .services
        .catalog
        .update_work_process(id, payload)
        .await?;
    Ok(success_response(process))
}

async fn delete_work_process(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.catalog.delete_work_process(id).await?;
    Ok(no_content_response())
}

/// Creates the router for the work process catalog
pub fn work_process_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_work_processes).post(create_work_process))
        .route("/:id", put(update_work_process))
        .route("/:id", delete(delete_work_process))
}

// ---- Car makes & models ----

async fn list_car_makes(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let makes = state.services.catalog.list_car_makes().await?;
    Ok(success_response(makes))
}

async fn create_car_make(
    State(state): State<AppState>,
    Json(payload): Json<CreateCarMakeInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let make = state.services.catalog.create_car_make(payload).await?;
    Ok(created_response(make))
}

/// Creates the router for car makes
pub fn car_make_routes() -> Router<AppState> {
    Router::new().route("/", get(list_car_makes).post(create_car_make))
}

async fn list_car_models(
    State(state): State<AppState>,
    Path(make_id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let models = state.services.catalog.list_car_models(make_id).await?;
    Ok(success_response(models))
}

async fn create_car_model(
    State(state): State<AppState>,
    Json(payload): Json<CreateCarModelInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let model = state.services.catalog.create_car_model(payload).await?;
    Ok(created_response(model))
}

/// Creates the router for car models. Listing is per make
/// (`GET /car-models/{make_id}`), creation posts to the collection root.
pub fn car_model_routes() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::post(create_car_model))
        .route("/:make_id", get(list_car_models))
}
