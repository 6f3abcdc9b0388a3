use super::common::{created_response, success_response, validate_input};
use crate::{
    domain::status::WorkStatus,
    errors::ServiceError,
    handlers::AppState,
    services::work_orders::{CreateWorkOrderInput, UpdateWorkOrderInput, WorkOrderFilter},
};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{get, put},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WorkOrderListQuery {
    /// Exact status filter
    pub status: Option<WorkStatus>,
    /// Only orders of this client
    pub client_id: Option<Uuid>,
    /// Substring over work number, client name/phone and turbo code
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusChangeRequest {
    pub status: WorkStatus,
}

/// Create a work order; the work number is allocated server-side
#[utoipa::path(
    post,
    path = "/api/work-orders",
    request_body = CreateWorkOrderInput,
    responses(
        (status = 201, description = "Work order created"),
        (status = 400, description = "Unknown client or vehicle", body = crate::errors::ErrorResponse)
    ),
    tag = "work-orders"
)]
pub async fn create_work_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateWorkOrderInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let order = state.services.work_orders.create(payload).await?;
    Ok(created_response(order))
}

/// List work orders as joined summaries, newest first
#[utoipa::path(
    get,
    path = "/api/work-orders",
    params(WorkOrderListQuery),
    responses(
        (status = 200, description = "Work order summaries", body = [crate::services::work_orders::WorkOrderSummary])
    ),
    tag = "work-orders"
)]
pub async fn list_work_orders(
    State(state): State<AppState>,
    Query(query): Query<WorkOrderListQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let summaries = state
        .services
        .work_orders
        .list(WorkOrderFilter {
            status: query.status,
            client_id: query.client_id,
            search: query.search,
        })
        .await?;
    Ok(success_response(summaries))
}

/// Get a work order by ID
#[utoipa::path(
    get,
    path = "/api/work-orders/{id}",
    params(("id" = Uuid, Path, description = "Work order ID")),
    responses(
        (status = 200, description = "Work order details"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "work-orders"
)]
pub async fn get_work_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let order = state.services.work_orders.get(id).await?;
    Ok(success_response(order))
}

/// Update a work order; bundled status changes are transition-checked
#[utoipa::path(
    put,
    path = "/api/work-orders/{id}",
    params(("id" = Uuid, Path, description = "Work order ID")),
    request_body = UpdateWorkOrderInput,
    responses(
        (status = 200, description = "Work order updated"),
        (status = 400, description = "Illegal status transition", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "work-orders"
)]
pub async fn update_work_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateWorkOrderInput>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;
    let order = state.services.work_orders.update(id, payload).await?;
    Ok(success_response(order))
}

/// Change the workflow status of a work order
#[utoipa::path(
    put,
    path = "/api/work-orders/{id}/status",
    params(("id" = Uuid, Path, description = "Work order ID")),
    request_body = StatusChangeRequest,
    responses(
        (status = 200, description = "Status updated"),
        (status = 400, description = "Illegal status transition", body = crate::errors::ErrorResponse),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "work-orders"
)]
pub async fn update_work_order_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<StatusChangeRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let order = state
        .services
        .work_orders
        .update_status(id, payload.status)
        .await?;
    Ok(success_response(order))
}

/// Creates the router for work order endpoints
pub fn work_order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_work_orders).post(create_work_order))
        .route("/:id", get(get_work_order).put(update_work_order))
        .route("/:id/status", put(update_work_order_status))
}
