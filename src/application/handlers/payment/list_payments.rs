//! ListPaymentsHandler - Query handler for listing payments.

use std::sync::Arc;

use crate::domain::foundation::{Role, UserId};
use crate::domain::payment::{Payment, PaymentError};
use crate::ports::PaymentRepository;

/// Query for a payment listing.
#[derive(Debug, Clone)]
pub struct ListPaymentsQuery {
    pub user_id: UserId,
    pub role: Role,
}

/// Handler for listing payments.
///
/// Members get their own payments; staff and admins get everything.
pub struct ListPaymentsHandler {
    repository: Arc<dyn PaymentRepository>,
}

impl ListPaymentsHandler {
    pub fn new(repository: Arc<dyn PaymentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListPaymentsQuery) -> Result<Vec<Payment>, PaymentError> {
        let payments = if query.role.can_manage_plans() {
            self.repository.list().await?
        } else {
            self.repository.list_by_user(&query.user_id).await?
        };
        Ok(payments)
    }
}
