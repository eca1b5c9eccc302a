/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Liveness route (`GET /`)
 * 2. API routes (itinerary, budget, suggestions)
 * 3. Chat routes (history, WebSocket)
 * 4. Fallback handler (JSON 404)
 *
 * # Layers
 *
 * - `TraceLayer` logs every request through `tracing`
 * - `CorsLayer::permissive()` lets any browser origin call the API
 */

use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::chat_routes::configure_chat_routes;
use crate::backend::server::state::AppState;

/// Message returned by the liveness route
pub const HEALTH_STATUS: &str = "GlobeTrotter API is running!";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Shared pool, chat registry and listener settings
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(health));

    let router = configure_api_routes(router);
    let router = configure_chat_routes(router);

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// GET /
async fn health() -> Json<Value> {
    Json(json!({ "status": HEALTH_STATUS }))
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!("[Router] No route for {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": format!("No route for {}", uri.path()),
            "status": StatusCode::NOT_FOUND.as_u16(),
        })),
    )
}
