//! Payment activation.
//!
//! The single place where a payment turns into a membership. Handlers
//! call [`activate`] explicitly after recording a plan payment; nothing
//! activates implicitly on save.

use crate::domain::foundation::{MembershipId, Timestamp};
use crate::domain::membership::Membership;
use crate::domain::plan::MembershipPlan;

use super::{Payment, PaymentError};

/// Result of activating a payment: the linked payment and the
/// membership it created. Both must be persisted atomically.
#[derive(Debug, Clone)]
pub struct Activation {
    pub payment: Payment,
    pub membership: Membership,
}

/// Activate a successful plan payment into a membership.
///
/// Creates a membership running from `now` for the plan's duration,
/// owned by the paying member, and links the payment to it.
///
/// # Errors
///
/// - `AlreadyActivated` if the payment is already linked to a
///   membership. Activation happens at most once per payment.
/// - `NotSuccessful` if the payment did not succeed.
/// - `ValidationFailed` if the payment does not reference `plan`.
pub fn activate(
    mut payment: Payment,
    plan: &MembershipPlan,
    now: Timestamp,
) -> Result<Activation, PaymentError> {
    if payment.membership_id.is_some() {
        return Err(PaymentError::already_activated(payment.id));
    }
    if !payment.is_successful {
        return Err(PaymentError::not_successful(payment.id));
    }
    if payment.plan_id != Some(plan.id) {
        return Err(PaymentError::validation(
            "plan_id",
            "payment does not reference this plan",
        ));
    }

    let membership = Membership::activate(
        MembershipId::new(),
        payment.user_id,
        plan.id,
        now,
        plan.duration_in_days,
    );
    payment.link_membership(membership.id, now)?;

    Ok(Activation {
        payment,
        membership,
    })
}
