//! Plan repository port.
//!
//! Defines the contract for persisting and retrieving MembershipPlan
//! aggregates. Implementations handle the actual database operations.

use crate::domain::foundation::{DomainError, PlanId};
use crate::domain::plan::MembershipPlan;
use async_trait::async_trait;

/// Repository port for MembershipPlan aggregate persistence.
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Save a new plan.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, plan: &MembershipPlan) -> Result<(), DomainError>;

    /// Find a plan by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &PlanId) -> Result<Option<MembershipPlan>, DomainError>;

    /// List all plans, newest first.
    async fn list(&self) -> Result<Vec<MembershipPlan>, DomainError>;
}
