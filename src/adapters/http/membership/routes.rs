//! Axum router configuration for membership endpoints.

use axum::{routing::get, Router};

use super::super::state::AppState;
use super::handlers::{get_membership, list_memberships};

/// Create the membership API router.
///
/// # Routes
/// - `GET /` - List memberships visible to the caller
/// - `GET /:id` - Get a single membership
///
/// Members see only their own memberships; staff and admins see all.
/// There is no POST: memberships are created by payment activation.
pub fn membership_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_memberships))
        .route("/:id", get(get_membership))
}
