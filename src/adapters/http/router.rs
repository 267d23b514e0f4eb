//! Top-level router assembly.
//!
//! Mounts each module's routes under `/api` and applies the shared
//! middleware stack: request IDs, tracing, CORS and a request timeout.

use std::time::Duration;

use axum::http::HeaderValue;
use axum::{routing::get, Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::membership::membership_routes;
use super::payment::payment_routes;
use super::plan::plan_routes;
use super::state::AppState;

/// Build the application router.
///
/// # Routes
/// - `/health` - Liveness probe, no authentication
/// - `/api/plans` - Plan catalogue
/// - `/api/payments` - Payments and membership activation
/// - `/api/memberships` - Membership reads
pub fn router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .nest("/api/plans", plan_routes())
        .nest("/api/payments", payment_routes())
        .nest("/api/memberships", membership_routes())
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// GET /health - Liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any)
    }
}
