//! Route definitions for the CropEye advisory server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/irrigation", irrigation_routes())
        .nest("/pest-risk", pest_risk_routes())
        .nest("/fertilizer", fertilizer_routes())
        .route("/crop-stage", post(handlers::crop_stage))
}

/// Irrigation routes
fn irrigation_routes() -> Router<AppState> {
    Router::new()
        .route("/schedule", post(handlers::irrigation_schedule))
        .route("/flood-time", post(handlers::flood_time))
}

/// Pest and disease routes
fn pest_risk_routes() -> Router<AppState> {
    Router::new().route("/assessment", post(handlers::risk_assessment))
}

/// Fertilizer routes
fn fertilizer_routes() -> Router<AppState> {
    Router::new().route("/schedule", post(handlers::fertilizer_schedule))
}
