//! Data transfer objects for payment endpoints.
//!
//! Amounts cross the wire as decimal strings ("49.99"). A client may
//! send an `amount` field when recording a payment, but it is ignored:
//! the charge is always the referenced plan's price.

use serde::{Deserialize, Serialize};

use crate::domain::payment::Payment;

use super::super::membership::dto::MembershipResponse;

/// Request to record a payment.
///
/// Exactly one of `membership_plan` / `membership` must be set.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePaymentRequest {
    /// Plan being bought. Activates a new membership.
    #[serde(default)]
    pub membership_plan: Option<String>,
    /// Existing membership being paid against.
    #[serde(default)]
    pub membership: Option<String>,
    /// How the member paid, e.g. "Credit Card".
    pub payment_method: String,
    /// External reference. Generated server-side when absent.
    #[serde(default)]
    pub transaction_reference: Option<String>,
    /// Accepted for wire compatibility; the server prices from the plan.
    #[serde(default)]
    pub amount: Option<String>,
}

/// Payment details as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentResponse {
    pub id: String,
    pub user: String,
    pub membership_plan: Option<String>,
    pub membership: Option<String>,
    pub amount: String,
    pub payment_method: String,
    pub transaction_reference: String,
    pub is_successful: bool,
    pub payment_date: String,
    pub created_at: String,
}

impl From<&Payment> for PaymentResponse {
    fn from(payment: &Payment) -> Self {
        Self {
            id: payment.id.to_string(),
            user: payment.user_id.to_string(),
            membership_plan: payment.plan_id.as_ref().map(|id| id.to_string()),
            membership: payment.membership_id.as_ref().map(|id| id.to_string()),
            amount: payment.amount.to_string(),
            payment_method: payment.payment_method.as_str().to_string(),
            transaction_reference: payment.transaction_reference.as_str().to_string(),
            is_successful: payment.is_successful,
            payment_date: payment.payment_date.as_datetime().to_rfc3339(),
            created_at: payment.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Response to recording a payment.
///
/// `membership` is present when the payment activated a new membership.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePaymentResponse {
    pub payment: PaymentResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership: Option<MembershipResponse>,
}

/// List of payments visible to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentListResponse {
    pub payments: Vec<PaymentResponse>,
}
