use super::common::{created_response, success_response, validate_input};
use crate::{
    errors::ServiceError,
    handlers::AppState,
    services::clients::{CreateClientInput, UpdateClientInput},
};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ClientListQuery {
    pub search: Option<String>,
}

async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<CreateClientInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let client = state.services.clients.create(payload).await?;
    Ok(created_response(client))
}

async fn list_clients(
    State(state): State<AppState>,
    Query(query): Query<ClientListQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let clients = state.services.clients.list(query.search.as_deref()).await?;
    Ok(success_response(clients))
}

async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let client = state.services.clients.get(id).await?;
    Ok(success_response(client))
}

async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateClientInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let client = state.services.clients.update(id, payload).await?;
    Ok(success_response(client))
}

/// Creates the router for client endpoints
pub fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_clients).post(create_client))
        .route("/:id", get(get_client).put(update_client))
}
