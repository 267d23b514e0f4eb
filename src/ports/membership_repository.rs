//! Membership repository port.
//!
//! Read-and-write contract for Membership aggregates. New memberships
//! are written through `PaymentRepository::save_activated` as part of
//! payment activation; this port covers lookups and renewal records.

use crate::domain::foundation::{DomainError, MembershipId, UserId};
use crate::domain::membership::Membership;
use async_trait::async_trait;

/// Repository port for Membership aggregate persistence.
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Find a membership by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &MembershipId) -> Result<Option<Membership>, DomainError>;

    /// List memberships owned by a user, newest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Membership>, DomainError>;

    /// List all memberships, newest first.
    ///
    /// Staff-facing; member requests go through `list_by_user`.
    async fn list(&self) -> Result<Vec<Membership>, DomainError>;
}
