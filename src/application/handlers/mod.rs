//! Use case handlers, grouped by aggregate.

pub mod membership;
pub mod payment;
pub mod plan;
