//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PlanRepository` - Membership plan persistence
//! - `PaymentRepository` - Payment persistence, including the atomic
//!   save of a payment together with the membership its activation
//!   created
//! - `MembershipRepository` - Membership persistence

mod membership_repository;
mod payment_repository;
mod plan_repository;

pub use membership_repository::MembershipRepository;
pub use payment_repository::PaymentRepository;
pub use plan_repository::PlanRepository;
