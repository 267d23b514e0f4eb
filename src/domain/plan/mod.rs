//! Membership plan domain module.
//!
//! A plan is the catalogue entry a member pays for: a name, a price,
//! and a duration in days that determines how long the resulting
//! membership runs.

mod aggregate;
mod errors;

pub use aggregate::MembershipPlan;
pub use errors::PlanError;
