//! Payment aggregate entity.
//!
//! # Design Decisions
//!
//! - **Amount from the plan**: the charged amount is always copied from
//!   the referenced plan's price. Client-supplied amounts are ignored.
//! - **One target**: a payment references either a plan (purchase) or an
//!   existing membership (renewal record), never both.
//! - **Activation link**: a plan payment gains a `membership_id` exactly
//!   once, when activation creates its membership.

use crate::domain::foundation::{
    MembershipId, Money, PaymentId, PaymentMethod, PlanId, Timestamp, TransactionReference, UserId,
};
use crate::domain::membership::Membership;
use crate::domain::plan::MembershipPlan;
use serde::{Deserialize, Serialize};

use super::PaymentError;

/// Payment aggregate - a recorded charge against a member.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `transaction_reference` is unique across all payments
/// - Exactly one of `plan_id` / the original membership target is set
///   at creation; `membership_id` on a plan payment is set only by
///   activation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier for this payment.
    pub id: PaymentId,

    /// Member who paid.
    pub user_id: UserId,

    /// Plan purchased, for plan payments.
    pub plan_id: Option<PlanId>,

    /// Membership this payment is linked to.
    ///
    /// For plan payments this is the membership created by activation.
    /// For renewal records it is the existing membership paid against.
    pub membership_id: Option<MembershipId>,

    /// Charged amount in cents, copied from the plan.
    pub amount: Money,

    /// How the member paid ("Credit Card", "PayPal", ...).
    pub payment_method: PaymentMethod,

    /// Unique external reconciliation reference.
    pub transaction_reference: TransactionReference,

    /// Whether the charge succeeded.
    pub is_successful: bool,

    /// When the payment was made.
    pub payment_date: Timestamp,

    /// When the record was created.
    pub created_at: Timestamp,

    /// When the record was last updated.
    pub updated_at: Timestamp,
}

impl Payment {
    /// Record a successful payment for a plan purchase.
    ///
    /// The amount is the plan's current price. The payment is not yet
    /// linked to a membership; activation does that.
    pub fn for_plan(
        id: PaymentId,
        user_id: UserId,
        plan: &MembershipPlan,
        method: PaymentMethod,
        reference: TransactionReference,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            plan_id: Some(plan.id),
            membership_id: None,
            amount: plan.price,
            payment_method: method,
            transaction_reference: reference,
            is_successful: true,
            payment_date: now,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a successful payment against an existing membership.
    ///
    /// The amount is the price of the plan the membership was bought
    /// on. No new membership results from this payment.
    pub fn for_membership(
        id: PaymentId,
        user_id: UserId,
        membership: &Membership,
        plan: &MembershipPlan,
        method: PaymentMethod,
        reference: TransactionReference,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            plan_id: None,
            membership_id: Some(membership.id),
            amount: plan.price,
            payment_method: method,
            transaction_reference: reference,
            is_successful: true,
            payment_date: now,
            created_at: now,
            updated_at: now,
        }
    }

    /// Link this payment to the membership its activation created.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyActivated` if the payment is already linked to
    /// a membership.
    pub fn link_membership(
        &mut self,
        membership_id: MembershipId,
        now: Timestamp,
    ) -> Result<(), PaymentError> {
        if self.membership_id.is_some() {
            return Err(PaymentError::already_activated(self.id));
        }
        self.membership_id = Some(membership_id);
        self.updated_at = now;
        Ok(())
    }
}
