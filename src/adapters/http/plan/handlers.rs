//! HTTP handlers for plan endpoints.
//!
//! The catalogue is readable by every authenticated user; creating a
//! plan is limited to staff and admins.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::plan::{CreatePlanCommand, GetPlanQuery};
use crate::domain::foundation::{Money, PlanId};
use crate::domain::plan::PlanError;

use super::super::error::ErrorResponse;
use super::super::extract::AuthenticatedUser;
use super::super::state::AppState;
use super::dto::{CreatePlanRequest, PlanListResponse, PlanResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/plans - List the plan catalogue
pub async fn list_plans(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<impl IntoResponse, PlanApiError> {
    let handler = state.list_plans_handler();
    let plans = handler.handle().await?;

    let response = PlanListResponse {
        plans: plans.iter().map(PlanResponse::from).collect(),
    };

    Ok(Json(response))
}

/// GET /api/plans/:id - Get a single plan
pub async fn get_plan(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, PlanApiError> {
    let plan_id = id
        .parse::<PlanId>()
        .map_err(|_| PlanError::validation("id", "must be a valid UUID"))?;

    let handler = state.get_plan_handler();
    let plan = handler.handle(GetPlanQuery { plan_id }).await?;

    Ok(Json(PlanResponse::from(&plan)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/plans - Create a plan (staff and admin only)
pub async fn create_plan(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreatePlanRequest>,
) -> Result<impl IntoResponse, PlanApiError> {
    let price = Money::parse(&request.price)
        .map_err(|e| PlanError::validation("price", e.to_string()))?;

    let handler = state.create_plan_handler();
    let cmd = CreatePlanCommand {
        role: user.role,
        name: request.name,
        description: request.description,
        price,
        duration_in_days: request.duration_in_days,
    };

    let plan = handler.handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(PlanResponse::from(&plan))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts plan errors to HTTP responses.
#[derive(Debug)]
pub struct PlanApiError(PlanError);

impl From<PlanError> for PlanApiError {
    fn from(err: PlanError) -> Self {
        Self(err)
    }
}

impl From<crate::domain::foundation::DomainError> for PlanApiError {
    fn from(err: crate::domain::foundation::DomainError) -> Self {
        Self(PlanError::infrastructure(err.to_string()))
    }
}

impl IntoResponse for PlanApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            PlanError::NotFound(_) => (StatusCode::NOT_FOUND, "PLAN_NOT_FOUND"),
            PlanError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            PlanError::ValidationFailed { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            PlanError::Infrastructure(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse::new(error_code, self.0.message());
        (status, Json(body)).into_response()
    }
}
