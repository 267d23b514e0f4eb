//! Transaction reference value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

/// External reference for a payment transaction.
///
/// Unique across all payments. When a client does not supply one, a
/// fresh UUID string is generated so every payment carries a usable
/// reconciliation handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionReference(String);

impl TransactionReference {
    const MAX_LENGTH: usize = 100;

    /// Creates a reference from a client-supplied string.
    pub fn new(reference: impl Into<String>) -> Result<Self, ValidationError> {
        let reference = reference.into();
        if reference.trim().is_empty() {
            return Err(ValidationError::empty_field("transaction_reference"));
        }
        if reference.len() > Self::MAX_LENGTH {
            return Err(ValidationError::invalid_format(
                "transaction_reference",
                format!("exceeds {} characters", Self::MAX_LENGTH),
            ));
        }
        Ok(Self(reference))
    }

    /// Generates a fresh random reference.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
