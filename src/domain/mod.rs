//! Domain layer.
//!
//! Pure business logic with no knowledge of HTTP or the database.
//! Aggregates live in their own modules; shared value objects are in
//! [`foundation`].

pub mod foundation;
pub mod membership;
pub mod payment;
pub mod plan;
