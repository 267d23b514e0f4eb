//! Foundation value objects shared across all domain aggregates.
//!
//! These are the building blocks the gym domain is expressed in:
//! strongly-typed identifiers, UTC timestamps, money in cents, user
//! roles, payment method labels, and transaction references.

mod errors;
mod ids;
mod money;
mod payment_method;
mod role;
mod timestamp;
mod transaction_reference;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{MembershipId, PaymentId, PlanId, UserId};
pub use money::Money;
pub use payment_method::PaymentMethod;
pub use role::Role;
pub use timestamp::Timestamp;
pub use transaction_reference::TransactionReference;
