use super::common::{created_response, success_response, validate_input};
use crate::{
    errors::ServiceError,
    handlers::AppState,
    services::notes::{CreateCarNoteInput, CreateTurboNoteInput},
};
use axum::{
    extract::{Json, Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TurboNoteQuery {
    pub turbo_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CarNoteQuery {
    pub car_make: Option<String>,
    pub car_model: Option<String>,
}

async fn create_turbo_note(
    State(state): State<AppState>,
    Json(payload): Json<CreateTurboNoteInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let note = state.services.notes.create_turbo_note(payload).await?;
    Ok(created_response(note))
}

async fn list_turbo_notes(
    State(state): State<AppState>,
    Query(query): Query<TurboNoteQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let notes = state
        .services
        .notes
        .list_turbo_notes(query.turbo_code.as_deref())
        .await?;
    Ok(success_response(notes))
}

async fn create_car_note(
    State(state): State<AppState>,
    Json(payload): Json<CreateCarNoteInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let note = state.services.notes.create_car_note(payload).await?;
    Ok(created_response(note))
}

async fn list_car_notes(
    State(state): State<AppState>,
    Query(query): Query<CarNoteQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let notes = state
        .services
        .notes
        .list_car_notes(query.car_make.as_deref(), query.car_model.as_deref())
        .await?;
    Ok(success_response(notes))
}

/// Creates the router for turbo-code notes
pub fn turbo_note_routes() -> Router<AppState> {
    Router::new().route("/", get(list_turbo_notes).post(create_turbo_note))
}

/// Creates the router for car notes
pub fn car_note_routes() -> Router<AppState> {
    Router::new().route("/", get(list_car_notes).post(create_car_note))
}
