//! Plan-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | ValidationFailed | 400 |
//! | Forbidden | 403 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, PlanId};

/// Plan-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Plan was not found.
    NotFound(PlanId),

    /// Caller's role does not allow plan management.
    Forbidden,

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl PlanError {
    pub fn not_found(id: PlanId) -> Self {
        PlanError::NotFound(id)
    }

    pub fn forbidden() -> Self {
        PlanError::Forbidden
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PlanError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PlanError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::NotFound(_) => ErrorCode::PlanNotFound,
            PlanError::Forbidden => ErrorCode::Forbidden,
            PlanError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PlanError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            PlanError::NotFound(id) => format!("Plan not found: {}", id),
            PlanError::Forbidden => "Only staff may manage membership plans".to_string(),
            PlanError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            PlanError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PlanError {}

impl From<PlanError> for DomainError {
    fn from(err: PlanError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

impl From<DomainError> for PlanError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => PlanError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => PlanError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_plan_id() {
        let id = PlanId::new();
        let err = PlanError::not_found(id);
        assert!(matches!(err, PlanError::NotFound(i) if i == id));
        assert_eq!(err.code(), ErrorCode::PlanNotFound);
        assert!(err.message().contains(&id.to_string()));
    }

    #[test]
    fn validation_carries_field_and_message() {
        let err = PlanError::validation("duration_in_days", "must be positive");
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(err.message().contains("duration_in_days"));
    }

    #[test]
    fn forbidden_maps_to_forbidden_code() {
        assert_eq!(PlanError::forbidden().code(), ErrorCode::Forbidden);
    }

    #[test]
    fn converts_to_domain_error() {
        let err = PlanError::infrastructure("connection lost");
        let domain_err: DomainError = err.clone().into();
        assert_eq!(domain_err.code, err.code());
    }
}
