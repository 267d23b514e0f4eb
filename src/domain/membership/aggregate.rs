//! Membership aggregate entity.
//!
//! # Design Decisions
//!
//! - **Created by activation only**: a membership comes into existence
//!   when a successful payment is activated, never on its own
//! - **Period fixed at creation**: `end_date` is computed once from the
//!   plan's duration and never recomputed afterwards
//! - **Stored active flag**: `is_active` reflects lifecycle state, not
//!   a live comparison against the clock

use crate::domain::foundation::{MembershipId, PlanId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// Membership aggregate - a member's access window bought on a plan.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `start_date <= end_date`
/// - `end_date = start_date + plan.duration_in_days` at creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// Unique identifier for this membership.
    pub id: MembershipId,

    /// Member who owns this membership.
    pub user_id: UserId,

    /// Plan this membership was bought on.
    pub plan_id: PlanId,

    /// When access begins.
    pub start_date: Timestamp,

    /// When access ends.
    pub end_date: Timestamp,

    /// Whether the membership currently grants access.
    pub is_active: bool,

    /// When the membership was created.
    pub created_at: Timestamp,

    /// When the membership was last updated.
    pub updated_at: Timestamp,
}

impl Membership {
    /// Create an active membership starting now.
    ///
    /// The end date is `start + duration_in_days`. Callers pass the
    /// plan's duration so the period is fixed from the plan as it was
    /// at activation time.
    pub fn activate(
        id: MembershipId,
        user_id: UserId,
        plan_id: PlanId,
        start: Timestamp,
        duration_in_days: i32,
    ) -> Self {
        Self {
            id,
            user_id,
            plan_id,
            start_date: start,
            end_date: start.add_days(duration_in_days as i64),
            is_active: true,
            created_at: start,
            updated_at: start,
        }
    }

    /// Whether the membership period covers the given moment.
    ///
    /// This checks dates only; the stored `is_active` flag is the
    /// authoritative lifecycle state.
    pub fn covers(&self, at: Timestamp) -> bool {
        !at.is_before(&self.start_date) && !at.is_after(&self.end_date)
    }
}
