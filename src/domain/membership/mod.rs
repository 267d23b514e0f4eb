//! Membership domain module.
//!
//! A membership is a member's paid access window to the gym. It is
//! created exclusively by payment activation and carries the period
//! computed from the plan's duration at that moment.

mod aggregate;
mod errors;

pub use aggregate::Membership;
pub use errors::MembershipError;
