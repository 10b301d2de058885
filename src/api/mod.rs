//! API handlers and router for the equipment directory

pub mod equipment;
pub mod health;
pub mod openapi;

use std::path::Path;

use axum::{
    extract::FromRequest,
    routing::{get, patch, put},
    Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::{error::AppError, AppState};

/// JSON body extractor whose rejections use the application error envelope
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Confirmation body returned by write endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = state.config.server.static_dir.clone();

    let api = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route(
            "/api/equipments",
            get(equipment::list_equipment).post(equipment::create_equipment),
        )
        .route(
            "/api/equipments/:id",
            put(equipment::update_equipment).delete(equipment::delete_equipment),
        )
        .route("/api/equipments/:id/status", patch(equipment::update_equipment_status))
        .with_state(state);

    let mut app = api.merge(openapi::create_openapi_router());

    // Front-end assets for anything the API does not route
    if let Some(dir) = static_dir.filter(|dir| Path::new(dir).is_dir()) {
        tracing::info!("Serving static files from {}", dir);
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(TraceLayer::new_for_http()).layer(cors)
}
