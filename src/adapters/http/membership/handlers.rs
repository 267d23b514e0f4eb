//! HTTP handlers for membership endpoints.
//!
//! Memberships are created by payment activation only, so this module
//! exposes read endpoints and nothing else.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::membership::{GetMembershipQuery, ListMembershipsQuery};
use crate::domain::foundation::MembershipId;
use crate::domain::membership::MembershipError;

use super::super::error::ErrorResponse;
use super::super::extract::AuthenticatedUser;
use super::super::state::AppState;
use super::dto::{MembershipListResponse, MembershipResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/memberships - List memberships visible to the caller
pub async fn list_memberships(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, MembershipApiError> {
    let handler = state.list_memberships_handler();
    let query = ListMembershipsQuery {
        user_id: user.user_id,
        role: user.role,
    };

    let memberships = handler.handle(query).await?;

    let response = MembershipListResponse {
        memberships: memberships.iter().map(MembershipResponse::from).collect(),
    };

    Ok(Json(response))
}

/// GET /api/memberships/:id - Get a single membership
pub async fn get_membership(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, MembershipApiError> {
    let membership_id = id
        .parse::<MembershipId>()
        .map_err(|_| MembershipError::validation("id", "must be a valid UUID"))?;

    let handler = state.get_membership_handler();
    let query = GetMembershipQuery {
        membership_id,
        user_id: user.user_id,
        role: user.role,
    };

    let membership = handler.handle(query).await?;

    Ok(Json(MembershipResponse::from(&membership)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts membership errors to HTTP responses.
pub struct MembershipApiError(MembershipError);

impl From<MembershipError> for MembershipApiError {
    fn from(err: MembershipError) -> Self {
        Self(err)
    }
}

impl From<crate::domain::foundation::DomainError> for MembershipApiError {
    fn from(err: crate::domain::foundation::DomainError) -> Self {
        Self(MembershipError::infrastructure(err.to_string()))
    }
}

impl IntoResponse for MembershipApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            MembershipError::NotFound(_) => (StatusCode::NOT_FOUND, "MEMBERSHIP_NOT_FOUND"),
            MembershipError::ValidationFailed { .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_FAILED")
            }
            MembershipError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ErrorResponse::new(error_code, self.0.message());
        (status, Json(body)).into_response()
    }
}
