//! Axum router configuration for payment endpoints.

use axum::{routing::get, Router};

use super::super::state::AppState;
use super::handlers::{create_payment, get_payment, list_payments};

/// Create the payment API router.
///
/// # Routes
/// - `GET /` - List payments visible to the caller
/// - `GET /:id` - Get a single payment
/// - `POST /` - Record a payment (activates a membership for plan payments)
///
/// Members see only their own payments; staff and admins see all.
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_payments).post(create_payment))
        .route("/:id", get(get_payment))
}
