//! GetPaymentHandler - Query handler for fetching a single payment.

use std::sync::Arc;

use crate::domain::foundation::{PaymentId, Role, UserId};
use crate::domain::payment::{Payment, PaymentError};
use crate::ports::PaymentRepository;

/// Query for a single payment.
#[derive(Debug, Clone)]
pub struct GetPaymentQuery {
    pub payment_id: PaymentId,
    pub user_id: UserId,
    pub role: Role,
}

/// Handler for fetching a payment.
///
/// Members see only their own payments; staff and admins see all.
/// Someone else's payment reads as not-found rather than forbidden,
/// so payment IDs leak nothing about other members.
pub struct GetPaymentHandler {
    repository: Arc<dyn PaymentRepository>,
}

impl GetPaymentHandler {
    pub fn new(repository: Arc<dyn PaymentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetPaymentQuery) -> Result<Payment, PaymentError> {
        let payment = self
            .repository
            .find_by_id(&query.payment_id)
            .await?
            .ok_or_else(|| PaymentError::not_found(query.payment_id))?;

        if payment.user_id != query.user_id && !query.role.can_manage_plans() {
            return Err(PaymentError::not_found(query.payment_id));
        }

        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{
        DomainError, MembershipId, Money, PaymentMethod, PlanId, Timestamp, TransactionReference,
    };
    use crate::domain::membership::Membership;
    use crate::domain::plan::MembershipPlan;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockPaymentRepository {
        payments: Mutex<Vec<Payment>>,
    }

    impl MockPaymentRepository {
        fn with_payment(payment: Payment) -> Self {
            Self {
                payments: Mutex::new(vec![payment]),
            }
        }

        fn empty() -> Self {
            Self {
                payments: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PaymentRepository for MockPaymentRepository {
        async fn save(&self, payment: &Payment) -> Result<(), DomainError> {
            self.payments.lock().unwrap().push(payment.clone());
            Ok(())
        }

        async fn save_activated(
            &self,
            payment: &Payment,
            _membership: &Membership,
        ) -> Result<(), DomainError> {
            self.payments.lock().unwrap().push(payment.clone());
            Ok(())
        }

        async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, DomainError> {
            Ok(self
                .payments
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == *id)
                .cloned())
        }

        async fn reference_exists(
            &self,
            _reference: &TransactionReference,
        ) -> Result<bool, DomainError> {
            Ok(false)
        }

        async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Payment>, DomainError> {
            Ok(self
                .payments
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.user_id == *user_id)
                .cloned()
                .collect())
        }

        async fn list(&self) -> Result<Vec<Payment>, DomainError> {
            Ok(self.payments.lock().unwrap().clone())
        }
    }

    fn test_payment(user_id: UserId) -> Payment {
        let plan = MembershipPlan::new(
            PlanId::new(),
            "Monthly",
            None,
            Money::from_cents(4999).unwrap(),
            30,
        )
        .unwrap();
        Payment::for_plan(
            PaymentId::new(),
            user_id,
            &plan,
            PaymentMethod::new("Credit Card").unwrap(),
            TransactionReference::generate(),
            Timestamp::now(),
        )
    }

    #[tokio::test]
    async fn owner_sees_own_payment() {
        let user_id = UserId::new();
        let payment = test_payment(user_id);
        let repo = Arc::new(MockPaymentRepository::with_payment(payment.clone()));

        let handler = GetPaymentHandler::new(repo);
        let result = handler
            .handle(GetPaymentQuery {
                payment_id: payment.id,
                user_id,
                role: Role::Member,
            })
            .await
            .unwrap();

        assert_eq!(result.id, payment.id);
    }

    #[tokio::test]
    async fn staff_sees_any_payment() {
        let payment = test_payment(UserId::new());
        let repo = Arc::new(MockPaymentRepository::with_payment(payment.clone()));

        let handler = GetPaymentHandler::new(repo);
        let result = handler
            .handle(GetPaymentQuery {
                payment_id: payment.id,
                user_id: UserId::new(),
                role: Role::Staff,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn member_cannot_see_another_members_payment() {
        let payment = test_payment(UserId::new());
        let repo = Arc::new(MockPaymentRepository::with_payment(payment.clone()));

        let handler = GetPaymentHandler::new(repo);
        let result = handler
            .handle(GetPaymentQuery {
                payment_id: payment.id,
                user_id: UserId::new(),
                role: Role::Member,
            })
            .await;

        // Hidden, not forbidden
        assert!(matches!(result, Err(PaymentError::NotFound(_))));
    }

    #[tokio::test]
    async fn unknown_payment_is_not_found() {
        let repo = Arc::new(MockPaymentRepository::empty());

        let handler = GetPaymentHandler::new(repo);
        let result = handler
            .handle(GetPaymentQuery {
                payment_id: PaymentId::new(),
                user_id: UserId::new(),
                role: Role::Admin,
            })
            .await;

        assert!(matches!(result, Err(PaymentError::NotFound(_))));
    }
}
