//! Payment repository port.
//!
//! Defines the contract for persisting and retrieving Payment
//! aggregates. The activation flow needs the payment and its new
//! membership written together, so the port exposes an atomic save
//! for that pair rather than leaving handlers to sequence two writes.

use crate::domain::foundation::{DomainError, PaymentId, TransactionReference, UserId};
use crate::domain::membership::Membership;
use crate::domain::payment::Payment;
use async_trait::async_trait;

/// Repository port for Payment aggregate persistence.
///
/// Implementations must ensure:
/// - Unique transaction_reference constraint
/// - `save_activated` writes the payment and membership in one
///   transaction; neither is visible without the other
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Save a new payment that did not create a membership.
    ///
    /// Used for payments recorded against an existing membership.
    ///
    /// # Errors
    ///
    /// - `DuplicateTransactionReference` if the reference is taken
    /// - `DatabaseError` on persistence failure
    async fn save(&self, payment: &Payment) -> Result<(), DomainError>;

    /// Atomically save an activated payment and the membership it
    /// created.
    ///
    /// # Errors
    ///
    /// - `DuplicateTransactionReference` if the reference is taken
    /// - `DatabaseError` on persistence failure
    async fn save_activated(
        &self,
        payment: &Payment,
        membership: &Membership,
    ) -> Result<(), DomainError>;

    /// Find a payment by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, DomainError>;

    /// Check whether a transaction reference is already recorded.
    async fn reference_exists(
        &self,
        reference: &TransactionReference,
    ) -> Result<bool, DomainError>;

    /// List payments made by a user, newest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Payment>, DomainError>;

    /// List all payments, newest first.
    ///
    /// Staff-facing; member requests go through `list_by_user`.
    async fn list(&self) -> Result<Vec<Payment>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn payment_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn PaymentRepository) {}
    }
}
