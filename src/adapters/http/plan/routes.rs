//! Axum router configuration for plan endpoints.

use axum::{routing::get, Router};

use super::super::state::AppState;
use super::handlers::{create_plan, get_plan, list_plans};

/// Create the plan API router.
///
/// # Routes
/// - `GET /` - List the plan catalogue
/// - `GET /:id` - Get a single plan
/// - `POST /` - Create a plan (staff and admin only)
pub fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_plans).post(create_plan))
        .route("/:id", get(get_plan))
}
