//! PostgreSQL adapters.
//!
//! sqlx-backed implementations of the repository ports. Schema lives
//! in the `migrations/` directory at the crate root.

mod membership_repository;
mod payment_repository;
mod plan_repository;

pub use membership_repository::PostgresMembershipRepository;
pub use payment_repository::PostgresPaymentRepository;
pub use plan_repository::PostgresPlanRepository;
