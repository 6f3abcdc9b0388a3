//! Turbo Service API Library
//!
//! Backend for turbocharger workshop management: parts inventory with
//! stock movements, clients and vehicles, and the work-order workflow
//! with pricing and status tracking.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod migrator;
pub mod openapi;
pub mod services;

use axum::{extract::State, response::Json, routing::get, Router};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::Arc;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub event_sender: events::EventSender,
    pub services: handlers::AppServices,
}

/// The full `/api` surface.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(api_root))
        .route("/status", get(api_status))
        .nest("/part-types", handlers::part_types::part_type_routes())
        .nest("/suppliers", handlers::suppliers::supplier_routes())
        .nest("/parts", handlers::parts::part_routes())
        .nest(
            "/stock-movements",
            handlers::stock_movements::stock_movement_routes(),
        )
        .nest("/clients", handlers::clients::client_routes())
        .nest("/vehicles", handlers::vehicles::vehicle_routes())
        .nest("/work-orders", handlers::work_orders::work_order_routes())
        .nest("/turbo-parts", handlers::catalog::turbo_part_routes())
        .nest("/work-processes", handlers::catalog::work_process_routes())
        .nest("/car-makes", handlers::catalog::car_make_routes())
        .nest("/car-models", handlers::catalog::car_model_routes())
        .nest("/turbo-notes", handlers::notes::turbo_note_routes())
        .nest("/car-notes", handlers::notes::car_note_routes())
        .nest("/settings", handlers::settings::settings_routes())
        .merge(handlers::seed::seed_routes())
}

async fn api_root() -> Json<Value> {
    Json(json!({ "message": "Turbó Szerviz Kezelő API működik" }))
}

async fn api_status() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");
    Json(json!({
        "status": "ok",
        "version": version,
        "service": "turbo-service-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": std::env::var("RUN_ENV").unwrap_or_else(|_| "development".to_string()),
    }))
}

/// Readiness probe: checks database connectivity.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let db_status = match state.db.ping().await {
        Ok(_) => "healthy",
        Err(_) => "unhealthy",
    };

    Json(json!({
        "status": db_status,
        "checks": {
            "database": db_status,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
