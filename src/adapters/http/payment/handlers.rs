//! HTTP handlers for payment endpoints.
//!
//! Recording a payment against a plan activates a membership in the
//! same request; the response then carries both the payment and the
//! membership it created.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::payment::{
    CreatePaymentCommand, GetPaymentQuery, ListPaymentsQuery,
};
use crate::domain::foundation::{
    MembershipId, PaymentId, PaymentMethod, PlanId, TransactionReference,
};
use crate::domain::payment::PaymentError;

use super::super::error::ErrorResponse;
use super::super::extract::AuthenticatedUser;
use super::super::membership::dto::MembershipResponse;
use super::super::state::AppState;
use super::dto::{
    CreatePaymentRequest, CreatePaymentResponse, PaymentListResponse, PaymentResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/payments - List payments visible to the caller
pub async fn list_payments(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, PaymentApiError> {
    let handler = state.list_payments_handler();
    let query = ListPaymentsQuery {
        user_id: user.user_id,
        role: user.role,
    };

    let payments = handler.handle(query).await?;

    let response = PaymentListResponse {
        payments: payments.iter().map(PaymentResponse::from).collect(),
    };

    Ok(Json(response))
}

/// GET /api/payments/:id - Get a single payment
pub async fn get_payment(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let payment_id = id
        .parse::<PaymentId>()
        .map_err(|_| PaymentError::validation("id", "must be a valid UUID"))?;

    let handler = state.get_payment_handler();
    let query = GetPaymentQuery {
        payment_id,
        user_id: user.user_id,
        role: user.role,
    };

    let payment = handler.handle(query).await?;

    Ok(Json(PaymentResponse::from(&payment)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/payments - Record a payment
///
/// A payment referencing a plan activates a new membership; one
/// referencing an existing membership is recorded as-is. Any client
/// supplied `amount` is discarded.
pub async fn create_payment(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let plan_id = request
        .membership_plan
        .as_deref()
        .map(|s| {
            s.parse::<PlanId>()
                .map_err(|_| PaymentError::validation("membership_plan", "must be a valid UUID"))
        })
        .transpose()?;

    let membership_id = request
        .membership
        .as_deref()
        .map(|s| {
            s.parse::<MembershipId>()
                .map_err(|_| PaymentError::validation("membership", "must be a valid UUID"))
        })
        .transpose()?;

    let payment_method = PaymentMethod::new(request.payment_method)
        .map_err(|e| PaymentError::validation("payment_method", e.to_string()))?;

    let transaction_reference = request
        .transaction_reference
        .map(|s| {
            TransactionReference::new(s)
                .map_err(|e| PaymentError::validation("transaction_reference", e.to_string()))
        })
        .transpose()?;

    let handler = state.create_payment_handler();
    let cmd = CreatePaymentCommand {
        user_id: user.user_id,
        plan_id,
        membership_id,
        payment_method,
        transaction_reference,
    };

    let result = handler.handle(cmd).await?;

    let response = CreatePaymentResponse {
        payment: PaymentResponse::from(&result.payment),
        membership: result.membership.as_ref().map(MembershipResponse::from),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts payment errors to HTTP responses.
///
/// A payment body pointing at a nonexistent plan or membership is a
/// client mistake, so those map to 400 rather than 404.
#[derive(Debug)]
pub struct PaymentApiError(PaymentError);

impl From<PaymentError> for PaymentApiError {
    fn from(err: PaymentError) -> Self {
        Self(err)
    }
}

impl From<crate::domain::foundation::DomainError> for PaymentApiError {
    fn from(err: crate::domain::foundation::DomainError) -> Self {
        Self(PaymentError::from(err))
    }
}

impl IntoResponse for PaymentApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            PaymentError::NotFound(_) => (StatusCode::NOT_FOUND, "PAYMENT_NOT_FOUND"),
            PaymentError::PlanNotFound(_) => (StatusCode::BAD_REQUEST, "PLAN_NOT_FOUND"),
            PaymentError::MembershipNotFound(_) => {
                (StatusCode::BAD_REQUEST, "MEMBERSHIP_NOT_FOUND")
            }
            PaymentError::MissingTarget => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            PaymentError::AlreadyActivated(_) => {
                (StatusCode::CONFLICT, "PAYMENT_ALREADY_ACTIVATED")
            }
            PaymentError::NotSuccessful(_) => (StatusCode::BAD_REQUEST, "PAYMENT_NOT_SUCCESSFUL"),
            PaymentError::DuplicateReference(_) => {
                (StatusCode::CONFLICT, "DUPLICATE_TRANSACTION_REFERENCE")
            }
            PaymentError::ValidationFailed { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            PaymentError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ErrorResponse::new(error_code, self.0.message());
        (status, Json(body)).into_response()
    }
}
