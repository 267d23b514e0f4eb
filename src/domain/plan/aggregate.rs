//! Membership plan aggregate entity.
//!
//! # Design Decisions
//!
//! - **Money in cents**: `price` is stored as i64 cents (not floats)
//! - **Duration in whole days**: membership length is `duration_in_days`,
//!   applied once at activation time
//! - **Price is authoritative**: payment amounts are always copied from
//!   the plan, never taken from the client

use crate::domain::foundation::{Money, PlanId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// Maximum plan duration (ten years).
const MAX_DURATION_DAYS: i32 = 3650;

/// Membership plan aggregate.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `name` is non-empty
/// - `duration_in_days` is between 1 and 3650
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipPlan {
    /// Unique identifier for this plan.
    pub id: PlanId,

    /// Display name, e.g. "Monthly Unlimited".
    pub name: String,

    /// Optional marketing description.
    pub description: Option<String>,

    /// Price in cents.
    pub price: Money,

    /// How long a membership bought on this plan lasts.
    pub duration_in_days: i32,

    /// When the plan was created.
    pub created_at: Timestamp,

    /// When the plan was last updated.
    pub updated_at: Timestamp,
}

impl MembershipPlan {
    /// Create a new plan.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is empty or the duration
    /// is outside 1..=3650 days.
    pub fn new(
        id: PlanId,
        name: impl Into<String>,
        description: Option<String>,
        price: Money,
        duration_in_days: i32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if !(1..=MAX_DURATION_DAYS).contains(&duration_in_days) {
            return Err(ValidationError::out_of_range(
                "duration_in_days",
                1,
                MAX_DURATION_DAYS as i64,
                duration_in_days as i64,
            ));
        }

        let now = Timestamp::now();
        Ok(Self {
            id,
            name,
            description,
            price,
            duration_in_days,
            created_at: now,
            updated_at: now,
        })
    }
}
