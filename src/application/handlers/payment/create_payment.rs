//! CreatePaymentHandler - Command handler for recording a payment.
//!
//! This is the activation entry point: a payment referencing a plan is
//! recorded and immediately activated into a membership, in one
//! explicit step. A payment referencing an existing membership is
//! recorded as-is and creates nothing.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{
    MembershipId, PaymentId, PaymentMethod, PlanId, Timestamp, TransactionReference, UserId,
};
use crate::domain::membership::Membership;
use crate::domain::payment::{activate, Payment, PaymentError};
use crate::ports::{MembershipRepository, PaymentRepository, PlanRepository};

/// Command to record a payment.
///
/// Exactly one of `plan_id` / `membership_id` must be set. Any amount
/// the client sent is dropped before this point; the charge is always
/// the plan's price.
#[derive(Debug, Clone)]
pub struct CreatePaymentCommand {
    pub user_id: UserId,
    pub plan_id: Option<PlanId>,
    pub membership_id: Option<MembershipId>,
    pub payment_method: PaymentMethod,
    pub transaction_reference: Option<TransactionReference>,
}

/// Result of recording a payment.
///
/// `membership` is the newly activated membership for plan payments,
/// and `None` for payments against an existing membership.
#[derive(Debug, Clone)]
pub struct CreatePaymentResult {
    pub payment: Payment,
    pub membership: Option<Membership>,
}

/// Handler for recording payments and activating memberships.
pub struct CreatePaymentHandler {
    payment_repository: Arc<dyn PaymentRepository>,
    plan_repository: Arc<dyn PlanRepository>,
    membership_repository: Arc<dyn MembershipRepository>,
}

impl CreatePaymentHandler {
    pub fn new(
        payment_repository: Arc<dyn PaymentRepository>,
        plan_repository: Arc<dyn PlanRepository>,
        membership_repository: Arc<dyn MembershipRepository>,
    ) -> Self {
        Self {
            payment_repository,
            plan_repository,
            membership_repository,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreatePaymentCommand,
    ) -> Result<CreatePaymentResult, PaymentError> {
        // 1. The payment must reference exactly one target
        if cmd.plan_id.is_some() && cmd.membership_id.is_some() {
            return Err(PaymentError::validation(
                "plan_id",
                "a payment may reference a plan or a membership, not both",
            ));
        }

        // 2. Resolve the transaction reference, generating one if absent
        let reference = match cmd.transaction_reference {
            Some(reference) => {
                if self.payment_repository.reference_exists(&reference).await? {
                    return Err(PaymentError::duplicate_reference(reference.as_str()));
                }
                reference
            }
            None => TransactionReference::generate(),
        };

        let now = Timestamp::now();

        match (cmd.plan_id, cmd.membership_id) {
            // 3a. Plan payment: record and activate in one step
            (Some(plan_id), None) => {
                let plan = self
                    .plan_repository
                    .find_by_id(&plan_id)
                    .await?
                    .ok_or_else(|| PaymentError::plan_not_found(plan_id))?;

                let payment = Payment::for_plan(
                    PaymentId::new(),
                    cmd.user_id,
                    &plan,
                    cmd.payment_method,
                    reference,
                    now,
                );
                let activation = activate(payment, &plan, now)?;

                self.payment_repository
                    .save_activated(&activation.payment, &activation.membership)
                    .await?;

                info!(
                    payment_id = %activation.payment.id,
                    membership_id = %activation.membership.id,
                    plan_id = %plan.id,
                    "payment activated into membership"
                );

                Ok(CreatePaymentResult {
                    payment: activation.payment,
                    membership: Some(activation.membership),
                })
            }

            // 3b. Membership payment: record against the existing membership
            (None, Some(membership_id)) => {
                let membership = self
                    .membership_repository
                    .find_by_id(&membership_id)
                    .await?
                    .ok_or_else(|| PaymentError::membership_not_found(membership_id))?;

                let plan = self
                    .plan_repository
                    .find_by_id(&membership.plan_id)
                    .await?
                    .ok_or_else(|| PaymentError::plan_not_found(membership.plan_id))?;

                let payment = Payment::for_membership(
                    PaymentId::new(),
                    cmd.user_id,
                    &membership,
                    &plan,
                    cmd.payment_method,
                    reference,
                    now,
                );

                self.payment_repository.save(&payment).await?;

                info!(
                    payment_id = %payment.id,
                    membership_id = %membership.id,
                    "payment recorded against existing membership"
                );

                Ok(CreatePaymentResult {
                    payment,
                    membership: None,
                })
            }

            // 3c. Neither target given
            _ => Err(PaymentError::missing_target()),
        }
    }
}
