//! Payment method value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Free-text label for how a payment was made.
///
/// Deliberately not an enum: the set of accepted methods ("Credit
/// Card", "PayPal", "Cash at desk") is an operational detail that
/// changes without code changes. The label is only recorded, never
/// branched on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentMethod(String);

impl PaymentMethod {
    const MAX_LENGTH: usize = 50;

    /// Creates a method label from a client-supplied string.
    pub fn new(method: impl Into<String>) -> Result<Self, ValidationError> {
        let method = method.into();
        if method.trim().is_empty() {
            return Err(ValidationError::empty_field("payment_method"));
        }
        if method.len() > Self::MAX_LENGTH {
            return Err(ValidationError::invalid_format(
                "payment_method",
                format!("exceeds {} characters", Self::MAX_LENGTH),
            ));
        }
        Ok(Self(method))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_labels() {
        assert_eq!(PaymentMethod::new("Credit Card").unwrap().as_str(), "Credit Card");
        assert!(PaymentMethod::new("PayPal").is_ok());
    }

    #[test]
    fn rejects_empty_label() {
        assert!(PaymentMethod::new("").is_err());
        assert!(PaymentMethod::new("   ").is_err());
    }

    #[test]
    fn rejects_overlong_label() {
        assert!(PaymentMethod::new("x".repeat(51)).is_err());
    }
}
