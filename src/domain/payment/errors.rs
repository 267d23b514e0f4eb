//! Payment-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | PlanNotFound | 400 |
//! | MembershipNotFound | 400 |
//! | MissingTarget | 400 |
//! | AlreadyActivated | 409 |
//! | NotSuccessful | 400 |
//! | DuplicateReference | 409 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |
//!
//! A payment pointing at a nonexistent plan or membership is a client
//! mistake in the request body, so those map to 400 rather than 404.

use crate::domain::foundation::{DomainError, ErrorCode, MembershipId, PaymentId, PlanId};

/// Payment-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// Payment was not found.
    NotFound(PaymentId),

    /// Referenced plan does not exist.
    PlanNotFound(PlanId),

    /// Referenced membership does not exist.
    MembershipNotFound(MembershipId),

    /// Neither a plan nor a membership was referenced.
    MissingTarget,

    /// Payment is already linked to a membership.
    AlreadyActivated(PaymentId),

    /// Payment did not succeed, so it cannot activate anything.
    NotSuccessful(PaymentId),

    /// Transaction reference is already used by another payment.
    DuplicateReference(String),

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl PaymentError {
    pub fn not_found(id: PaymentId) -> Self {
        PaymentError::NotFound(id)
    }

    pub fn plan_not_found(id: PlanId) -> Self {
        PaymentError::PlanNotFound(id)
    }

    pub fn membership_not_found(id: MembershipId) -> Self {
        PaymentError::MembershipNotFound(id)
    }

    pub fn missing_target() -> Self {
        PaymentError::MissingTarget
    }

    pub fn already_activated(id: PaymentId) -> Self {
        PaymentError::AlreadyActivated(id)
    }

    pub fn not_successful(id: PaymentId) -> Self {
        PaymentError::NotSuccessful(id)
    }

    pub fn duplicate_reference(reference: impl Into<String>) -> Self {
        PaymentError::DuplicateReference(reference.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PaymentError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PaymentError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PaymentError::NotFound(_) => ErrorCode::PaymentNotFound,
            PaymentError::PlanNotFound(_) => ErrorCode::PlanNotFound,
            PaymentError::MembershipNotFound(_) => ErrorCode::MembershipNotFound,
            PaymentError::MissingTarget => ErrorCode::ValidationFailed,
            PaymentError::AlreadyActivated(_) => ErrorCode::PaymentAlreadyActivated,
            PaymentError::NotSuccessful(_) => ErrorCode::PaymentNotSuccessful,
            PaymentError::DuplicateReference(_) => ErrorCode::DuplicateTransactionReference,
            PaymentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PaymentError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            PaymentError::NotFound(id) => format!("Payment not found: {}", id),
            PaymentError::PlanNotFound(id) => format!("Referenced plan not found: {}", id),
            PaymentError::MembershipNotFound(id) => {
                format!("Referenced membership not found: {}", id)
            }
            PaymentError::MissingTarget => {
                "A payment must reference a plan or a membership".to_string()
            }
            PaymentError::AlreadyActivated(id) => {
                format!("Payment {} is already linked to a membership", id)
            }
            PaymentError::NotSuccessful(id) => {
                format!("Payment {} was not successful", id)
            }
            PaymentError::DuplicateReference(reference) => {
                format!("Transaction reference '{}' is already in use", reference)
            }
            PaymentError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            PaymentError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PaymentError {}

impl From<PaymentError> for DomainError {
    fn from(err: PaymentError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

impl From<DomainError> for PaymentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::DuplicateTransactionReference => PaymentError::DuplicateReference(
                err.details
                    .get("transaction_reference")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
            ),
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => PaymentError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => PaymentError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_payment_id() {
        let id = PaymentId::new();
        let err = PaymentError::not_found(id);
        assert!(matches!(err, PaymentError::NotFound(i) if i == id));
        assert_eq!(err.code(), ErrorCode::PaymentNotFound);
    }

    #[test]
    fn already_activated_maps_to_conflict_code() {
        let err = PaymentError::already_activated(PaymentId::new());
        assert_eq!(err.code(), ErrorCode::PaymentAlreadyActivated);
    }

    #[test]
    fn missing_target_is_a_validation_failure() {
        assert_eq!(
            PaymentError::missing_target().code(),
            ErrorCode::ValidationFailed
        );
    }

    #[test]
    fn duplicate_reference_message_includes_reference() {
        let err = PaymentError::duplicate_reference("txn-42");
        assert!(err.message().contains("txn-42"));
        assert_eq!(err.code(), ErrorCode::DuplicateTransactionReference);
    }

    #[test]
    fn converts_to_domain_error() {
        let err = PaymentError::infrastructure("pool exhausted");
        let domain_err: DomainError = err.clone().into();
        assert_eq!(domain_err.code, err.code());
    }
}
